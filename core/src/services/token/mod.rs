//! Token service module for session JWTs
//!
//! Issues the HS256 bearer credential returned by login and token redemption,
//! and verifies it for authenticated requests.

mod config;
mod service;


pub use config::TokenServiceConfig;
pub use service::TokenService;
