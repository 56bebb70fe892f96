//! Shared utilities and common types for the Verity server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Error types and response structures
//! - Utility functions (validation, numeric slice helpers)
//! - Common type definitions

pub mod config;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, CacheConfig, CorsConfig, DatabaseConfig, Environment, JwtConfig,
    LoggingConfig, MailConfig, RateLimitConfig, ServerConfig,
};
pub use errors::{error_codes, messages, ErrorResponse};
pub use types::{ApiResponse, HealthResponse, PaginatedResponse, Pagination, SortOrder};
pub use utils::{slices, validation};
