//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the Verity application,
//! following Clean Architecture principles. It provides concrete implementations
//! of the repository and collaborator traits declared in `ve_core`.
//!
//! ## Architecture
//!
//! The infrastructure layer contains:
//! - **Database**: MySQL repositories using SQLx, including the transactional token redemption
//! - **Cache**: Redis client and the sliding-window rate limiter for token requests
//! - **Mail**: HTTP mail provider client and a logging mailer for development
//!
//! ## Features
//!
//! - `mysql`: Enable MySQL database support (default)
//! - `redis-cache`: Enable Redis caching support (default)

// Re-export core types for convenience
pub use ve_core::errors::*;

/// Database module - MySQL implementations using SQLx
#[cfg(feature = "mysql")]
pub mod database;

/// Cache module - Redis client and rate limiting
pub mod cache;

/// Mail module - outbound verification mail
pub mod mail;

/// Configuration module for infrastructure services
pub mod config {
    //! Infrastructure configuration, re-exported from the shared crate

    pub use ve_shared::config::{CacheConfig, DatabaseConfig, MailConfig, RateLimitConfig};
}

/// Load `.env` into the process environment, if present
pub fn load_env() {
    if dotenvy::dotenv().is_ok() {
        tracing::debug!("Loaded environment from .env");
    }
}

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Redis cache error
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Mail provider rejected a message
    #[error("Mail service error: {0}")]
    Mail(String),

    /// General infrastructure error
    #[error("Infrastructure error: {0}")]
    General(String),
}

impl From<InfrastructureError> for DomainError {
    fn from(error: InfrastructureError) -> Self {
        DomainError::Internal {
            message: error.to_string(),
        }
    }
}
