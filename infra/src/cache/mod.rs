//! Cache module for Redis-backed services
//!
//! Provides the shared Redis client with retry logic and the sliding-window
//! rate limiter applied to verification token requests.

pub mod rate_limiter;
pub mod redis_client;

#[cfg(test)]
mod tests;

pub use rate_limiter::RedisRateLimiter;
pub use redis_client::RedisClient;

// Re-export commonly used types
pub use ve_shared::config::CacheConfig;
