//! Configuration for the token service

use jsonwebtoken::Algorithm;
use ve_shared::config::JwtConfig;

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// JWT signing secret
    pub jwt_secret: String,
    /// JWT signing algorithm
    pub algorithm: Algorithm,
    /// Session lifetime in days
    pub session_lifetime_days: i64,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            jwt_secret: String::new(),
            algorithm: Algorithm::HS256,
            session_lifetime_days: 7 * 365,
        }
    }
}

impl From<&JwtConfig> for TokenServiceConfig {
    fn from(config: &JwtConfig) -> Self {
        Self {
            jwt_secret: config.secret.clone(),
            session_lifetime_days: config.session_lifetime_days,
            ..Self::default()
        }
    }
}
