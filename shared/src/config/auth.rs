//! Authentication configuration: session credentials and password hashing

use serde::{Deserialize, Serialize};

const DEVELOPMENT_SECRET: &str = "your-secret-key-change-in-production";

/// JWT session credential configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Application key used to sign HS256 session tokens
    pub secret: String,

    /// Session lifetime in days
    #[serde(default = "default_session_lifetime_days")]
    pub session_lifetime_days: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from(DEVELOPMENT_SECRET),
            session_lifetime_days: default_session_lifetime_days(),
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Set the session lifetime in days
    pub fn with_session_lifetime_days(mut self, days: i64) -> Self {
        self.session_lifetime_days = days;
        self
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEVELOPMENT_SECRET
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT configuration
    pub jwt: JwtConfig,

    /// bcrypt cost for registration and password reset
    #[serde(default = "default_bcrypt_cost")]
    pub bcrypt_cost: u32,

    /// bcrypt cost for authenticated password changes
    #[serde(default = "default_password_change_cost")]
    pub password_change_cost: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt: JwtConfig::default(),
            bcrypt_cost: default_bcrypt_cost(),
            password_change_cost: default_password_change_cost(),
        }
    }
}

impl AuthConfig {
    /// Create from environment variables
    ///
    /// The signing key is read from `APP_KEY`, falling back to `JWT_SECRET`.
    /// A missing key is left empty so that credential issuance fails loudly.
    pub fn from_env() -> Self {
        let secret = std::env::var("APP_KEY")
            .or_else(|_| std::env::var("JWT_SECRET"))
            .unwrap_or_default();
        let session_lifetime_days = std::env::var("JWT_SESSION_LIFETIME_DAYS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_session_lifetime_days);
        let bcrypt_cost = std::env::var("BCRYPT_COST")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_bcrypt_cost);

        Self {
            jwt: JwtConfig {
                secret,
                session_lifetime_days,
            },
            bcrypt_cost,
            password_change_cost: default_password_change_cost(),
        }
    }

    /// Get JWT secret
    pub fn jwt_secret(&self) -> &str {
        &self.jwt.secret
    }
}

fn default_session_lifetime_days() -> i64 {
    7 * 365
}

fn default_bcrypt_cost() -> u32 {
    14
}

fn default_password_change_cost() -> u32 {
    12
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jwt_config_default() {
        let config = JwtConfig::default();
        assert_eq!(config.session_lifetime_days, 2555);
        assert!(config.is_using_default_secret());
    }

    #[test]
    fn test_jwt_config_builder() {
        let config = JwtConfig::new("my-secret").with_session_lifetime_days(30);

        assert_eq!(config.session_lifetime_days, 30);
        assert!(!config.is_using_default_secret());
    }

    #[test]
    fn test_auth_config_default_costs() {
        let config = AuthConfig::default();
        assert_eq!(config.bcrypt_cost, 14);
        assert_eq!(config.password_change_cost, 12);
    }
}
