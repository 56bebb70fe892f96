//! Configuration for the authentication service

use ve_shared::config::AuthConfig;

/// Configuration for the authentication service
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    /// bcrypt cost for registration and password reset
    pub bcrypt_cost: u32,
    /// bcrypt cost when a signed-in user changes their password
    pub password_change_cost: u32,
}

impl Default for AuthServiceConfig {
    fn default() -> Self {
        Self {
            bcrypt_cost: 14,
            password_change_cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl From<&AuthConfig> for AuthServiceConfig {
    fn from(config: &AuthConfig) -> Self {
        Self {
            bcrypt_cost: config.bcrypt_cost,
            password_change_cost: config.password_change_cost,
        }
    }
}
