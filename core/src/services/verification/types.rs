//! Types used by the verification service

use serde::{Deserialize, Serialize};

use crate::domain::entities::VerificationPurpose;

/// Mail templates known to the delivery provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MailTemplate {
    UserVerifyRegistration,
    UserForgotPassword,
    UserUpdateEmail,
}

impl MailTemplate {
    pub fn for_purpose(purpose: VerificationPurpose) -> Self {
        match purpose {
            VerificationPurpose::VerifyRegistration => MailTemplate::UserVerifyRegistration,
            VerificationPurpose::ForgotPassword => MailTemplate::UserForgotPassword,
            VerificationPurpose::UpdateEmail => MailTemplate::UserUpdateEmail,
        }
    }

    /// Template name sent to the provider
    pub fn name(&self) -> &'static str {
        match self {
            MailTemplate::UserVerifyRegistration => "user_verify_registration",
            MailTemplate::UserForgotPassword => "user_forgot_password",
            MailTemplate::UserUpdateEmail => "user_update_email",
        }
    }

    pub fn subject(&self) -> &'static str {
        match self {
            MailTemplate::UserForgotPassword => "[Detect Data] Forgot Password",
            MailTemplate::UserVerifyRegistration | MailTemplate::UserUpdateEmail => {
                "[Detect Data] Email Verification"
            }
        }
    }
}

/// A templated mail carrying a redemption link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailMessage {
    pub template: MailTemplate,
    pub subject: String,
    /// Recipient address
    pub to: String,
    /// Recipient's first name
    pub name: String,
    pub link: String,
}

impl MailMessage {
    pub fn new(template: MailTemplate, to: impl Into<String>, name: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            template,
            subject: template.subject().to_string(),
            to: to.into(),
            name: name.into(),
            link: link.into(),
        }
    }
}

/// Outcome of a rate limit check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitStatus {
    pub allowed: bool,
    /// Requests left in the current window
    pub remaining: u32,
    /// Seconds until the oldest request leaves the window
    pub retry_after_seconds: u64,
}

impl RateLimitStatus {
    pub fn allowed(remaining: u32) -> Self {
        Self {
            allowed: true,
            remaining,
            retry_after_seconds: 0,
        }
    }

    pub fn limited(retry_after_seconds: u64) -> Self {
        Self {
            allowed: false,
            remaining: 0,
            retry_after_seconds,
        }
    }
}
