//! Mail Service Module
//!
//! Outbound delivery of verification mails. Two providers exist:
//!
//! - **HTTP**: posts templated messages to a JSON mail API
//! - **Log**: writes the message to the log, for development
//!
//! [`MailService`] picks one from [`MailConfig`] so the verification service
//! can stay generic over a single concrete mailer type.

use async_trait::async_trait;

use ve_core::services::verification::{MailDeliveryTrait, MailMessage};

use crate::config::MailConfig;

pub mod http_mail;
pub mod log_mail;


pub use http_mail::{HttpMailConfig, HttpMailService};
pub use log_mail::LogMailService;

/// Mailer selected from configuration
pub enum MailService {
    Http(HttpMailService),
    Log(LogMailService),
}

impl MailService {
    /// Build the configured mailer
    ///
    /// Falls back to the logging mailer when the HTTP provider is selected but
    /// cannot be initialized.
    pub fn from_config(config: &MailConfig) -> Self {
        if !config.uses_http_provider() {
            if config.provider != "log" {
                tracing::warn!(provider = %config.provider, "Unknown mail provider, using log mailer");
            }
            return MailService::Log(LogMailService::new());
        }

        match HttpMailService::new(HttpMailConfig::from(config)) {
            Ok(service) => MailService::Http(service),
            Err(e) => {
                tracing::error!(error = %e, "Failed to initialize HTTP mail service");
                tracing::warn!("Falling back to log mailer");
                MailService::Log(LogMailService::new())
            }
        }
    }

    pub fn provider_name(&self) -> &'static str {
        match self {
            MailService::Http(_) => "http",
            MailService::Log(_) => "log",
        }
    }
}

#[async_trait]
impl MailDeliveryTrait for MailService {
    async fn send(&self, message: &MailMessage) -> Result<(), String> {
        match self {
            MailService::Http(service) => service.send(message).await,
            MailService::Log(service) => service.send(message).await,
        }
    }
}

/// Mask the local part of an email address for logging
///
/// `alice@example.com` becomes `a****@example.com`.
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => {
            let first = local.chars().next().map(String::from).unwrap_or_default();
            format!("{}****@{}", first, domain)
        }
        None => "****".to_string(),
    }
}
