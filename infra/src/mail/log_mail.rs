//! Logging mailer for development
//!
//! Nothing leaves the process; the link is written to the log so a developer
//! can follow it by hand.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};

use ve_core::services::verification::{MailDeliveryTrait, MailMessage};

use super::mask_email;

#[derive(Debug, Default)]
pub struct LogMailService {
    sent: AtomicU64,
}

impl LogMailService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of messages logged so far
    pub fn sent_count(&self) -> u64 {
        self.sent.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl MailDeliveryTrait for LogMailService {
    async fn send(&self, message: &MailMessage) -> Result<(), String> {
        self.sent.fetch_add(1, Ordering::Relaxed);
        tracing::info!(
            to = %mask_email(&message.to),
            template = message.template.name(),
            subject = %message.subject,
            link = %message.link,
            "Mail delivery skipped (log provider)"
        );
        Ok(())
    }
}
