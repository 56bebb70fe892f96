//! Traits for mail delivery, rate limiting and session credential integration

use async_trait::async_trait;

use crate::domain::entities::{Account, SessionCredential};
use crate::errors::DomainError;

use super::types::{MailMessage, RateLimitStatus};

/// Trait for mail delivery integration
#[async_trait]
pub trait MailDeliveryTrait: Send + Sync {
    /// Deliver a templated message; the error carries the provider's reason
    async fn send(&self, message: &MailMessage) -> Result<(), String>;
}

/// Trait for request rate limiting
#[async_trait]
pub trait RateLimiterTrait: Send + Sync {
    /// Record one request under `key` and report whether it is allowed
    async fn check_rate_limit(
        &self,
        key: &str,
        max_requests: u32,
        window_seconds: u64,
    ) -> Result<RateLimitStatus, String>;
}

/// Issues the bearer credential handed out after login or redemption
pub trait CredentialIssuer: Send + Sync {
    fn issue(&self, account: &Account) -> Result<SessionCredential, DomainError>;
}
