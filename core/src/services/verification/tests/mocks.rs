//! Mock collaborators for testing the verification service

use async_trait::async_trait;
use chrono::{Duration, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::domain::entities::{Account, SessionCredential};
use crate::errors::{DomainError, TokenError};
use crate::services::verification::traits::{CredentialIssuer, MailDeliveryTrait, RateLimiterTrait};
use crate::services::verification::types::{MailMessage, RateLimitStatus};

// Mock mailer recording every delivered message
#[derive(Clone, Default)]
pub struct MockMailer {
    pub sent: Arc<Mutex<Vec<MailMessage>>>,
    pub should_fail: bool,
}

impl MockMailer {
    pub fn new(should_fail: bool) -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            should_fail,
        }
    }

    pub fn sent(&self) -> Vec<MailMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl MailDeliveryTrait for MockMailer {
    async fn send(&self, message: &MailMessage) -> Result<(), String> {
        if self.should_fail {
            return Err("mail provider returned 503".to_string());
        }
        self.sent.lock().unwrap().push(message.clone());
        Ok(())
    }
}

// Mock rate limiter counting requests per key without expiry
pub struct MockRateLimiter {
    pub counts: Mutex<HashMap<String, u32>>,
    pub should_fail: bool,
}

impl MockRateLimiter {
    pub fn new(should_fail: bool) -> Self {
        Self {
            counts: Mutex::new(HashMap::new()),
            should_fail,
        }
    }
}

#[async_trait]
impl RateLimiterTrait for MockRateLimiter {
    async fn check_rate_limit(
        &self,
        key: &str,
        max_requests: u32,
        window_seconds: u64,
    ) -> Result<RateLimitStatus, String> {
        if self.should_fail {
            return Err("connection refused".to_string());
        }
        let mut counts = self.counts.lock().unwrap();
        let count = counts.entry(key.to_string()).or_insert(0);
        if *count >= max_requests {
            return Ok(RateLimitStatus::limited(window_seconds));
        }
        *count += 1;
        Ok(RateLimitStatus::allowed(max_requests - *count))
    }
}

// Mock credential issuer producing predictable tokens
#[derive(Default)]
pub struct MockCredentialIssuer {
    pub should_fail: bool,
}

impl CredentialIssuer for MockCredentialIssuer {
    fn issue(&self, account: &Account) -> Result<SessionCredential, DomainError> {
        if self.should_fail {
            return Err(TokenError::TokenGenerationFailed.into());
        }
        Ok(SessionCredential {
            token: format!("session-{}", account.user_identifier),
            expires_at: Utc::now() + Duration::days(1),
        })
    }
}
