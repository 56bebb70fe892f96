//! Configuration for the verification service

use crate::domain::entities::{DEFAULT_EXPIRATION_MINUTES, TOKEN_LENGTH};

/// Configuration for the verification service
#[derive(Debug, Clone)]
pub struct VerificationServiceConfig {
    /// Length of generated tokens
    pub token_length: usize,
    /// Minutes before an issued token expires
    pub expiration_minutes: i64,
    /// Base URL of the web client, with trailing slash
    pub web_url: String,
    /// Token requests allowed per email within one window
    pub max_requests_per_window: u32,
    /// Length of the rate limit window in seconds
    pub rate_limit_window_seconds: u64,
}

impl Default for VerificationServiceConfig {
    fn default() -> Self {
        Self {
            token_length: TOKEN_LENGTH,
            expiration_minutes: DEFAULT_EXPIRATION_MINUTES,
            web_url: "http://localhost:3000/".to_string(),
            max_requests_per_window: 5,
            rate_limit_window_seconds: 3600,
        }
    }
}

impl VerificationServiceConfig {
    pub fn with_web_url(mut self, web_url: impl Into<String>) -> Self {
        let mut web_url = web_url.into();
        if !web_url.ends_with('/') {
            web_url.push('/');
        }
        self.web_url = web_url;
        self
    }
}
