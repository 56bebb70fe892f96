//! Mail delivery configuration

use serde::{Deserialize, Serialize};

/// Outbound mail configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MailConfig {
    /// Delivery provider ("http" or "log")
    #[serde(default = "default_provider")]
    pub provider: String,

    /// Mail API endpoint for the HTTP provider
    #[serde(default)]
    pub api_url: String,

    /// Bearer key for the mail API
    #[serde(default)]
    pub api_key: String,

    /// Display name of the sender
    pub from_name: String,

    /// Sender address
    pub from_address: String,

    /// Base URL of the web client; verification links are built on it
    pub web_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            api_url: String::new(),
            api_key: String::new(),
            from_name: String::from("Detect Data"),
            from_address: String::from("no-reply@localhost"),
            web_url: String::from("http://localhost:3000/"),
            timeout_seconds: default_timeout(),
        }
    }
}

impl MailConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            provider: std::env::var("MAIL_PROVIDER").unwrap_or(defaults.provider),
            api_url: std::env::var("MAIL_API_URL").unwrap_or(defaults.api_url),
            api_key: std::env::var("MAIL_API_KEY").unwrap_or(defaults.api_key),
            from_name: std::env::var("MAIL_FROM_NAME").unwrap_or(defaults.from_name),
            from_address: std::env::var("MAIL_FROM").unwrap_or(defaults.from_address),
            web_url: std::env::var("WEB_URL").unwrap_or(defaults.web_url),
            timeout_seconds: std::env::var("MAIL_TIMEOUT_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.timeout_seconds),
        }
    }

    /// Formatted `From` header value
    pub fn sender(&self) -> String {
        format!("{} <{}>", self.from_name, self.from_address)
    }

    /// Whether mail should go through the HTTP provider
    pub fn uses_http_provider(&self) -> bool {
        self.provider == "http" && !self.api_url.is_empty()
    }
}

fn default_provider() -> String {
    String::from("log")
}

fn default_timeout() -> u64 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sender_format() {
        let config = MailConfig {
            from_address: "hello@example.com".to_string(),
            ..Default::default()
        };
        assert_eq!(config.sender(), "Detect Data <hello@example.com>");
    }

    #[test]
    fn test_http_provider_requires_url() {
        let mut config = MailConfig {
            provider: "http".to_string(),
            ..Default::default()
        };
        assert!(!config.uses_http_provider());

        config.api_url = "https://mail.example.com/send".to_string();
        assert!(config.uses_http_provider());
    }
}
