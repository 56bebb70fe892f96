//! Verification token service module
//!
//! This module owns the one-time token lifecycle used by email flows:
//! - Token issuance with mail delivery of a purpose-specific link
//! - Single redemption of a token, atomically with its account mutation
//! - Optional per-email rate limiting of token requests

mod config;
mod service;
mod traits;
mod types;

#[cfg(test)]
pub(crate) mod tests;

pub use config::VerificationServiceConfig;
pub use service::VerificationService;
pub use traits::{CredentialIssuer, MailDeliveryTrait, RateLimiterTrait};
pub use types::{MailMessage, MailTemplate, RateLimitStatus};
