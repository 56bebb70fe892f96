//! Rate limiting configuration module

use serde::{Deserialize, Serialize};

/// Limits applied to verification token requests
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RateLimitConfig {
    /// Enable rate limiting
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Max token requests per email within the window
    #[serde(default = "default_token_requests_per_window")]
    pub token_requests_per_window: u32,

    /// Window length in seconds
    #[serde(default = "default_window_seconds")]
    pub window_seconds: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            token_requests_per_window: default_token_requests_per_window(),
            window_seconds: default_window_seconds(),
        }
    }
}

impl RateLimitConfig {
    /// Relaxed limits for local development
    pub fn development() -> Self {
        Self {
            enabled: false,
            token_requests_per_window: 100,
            ..Default::default()
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        let enabled = std::env::var("RATE_LIMIT_ENABLED")
            .map(|v| v == "true" || v == "1")
            .unwrap_or_else(|_| default_enabled());
        let token_requests_per_window = std::env::var("RATE_LIMIT_TOKEN_REQUESTS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_token_requests_per_window);
        let window_seconds = std::env::var("RATE_LIMIT_WINDOW_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_window_seconds);

        Self {
            enabled,
            token_requests_per_window,
            window_seconds,
        }
    }
}

fn default_enabled() -> bool {
    true
}

fn default_token_requests_per_window() -> u32 {
    5
}

fn default_window_seconds() -> u64 {
    3600
}
