//! Redis-based sliding-window rate limiter for verification token requests

use async_trait::async_trait;
use chrono::Utc;
use redis::AsyncCommands;
use std::sync::Arc;

use ve_core::services::verification::{RateLimitStatus, RateLimiterTrait};

use super::redis_client::RedisClient;

/// Redis implementation of [`RateLimiterTrait`]
///
/// Each key is a sorted set of request timestamps in milliseconds. Entries
/// older than the window are pruned before counting; rejected requests are
/// not recorded.
pub struct RedisRateLimiter {
    redis_client: Arc<RedisClient>,
}

impl RedisRateLimiter {
    pub fn new(redis_client: Arc<RedisClient>) -> Self {
        Self { redis_client }
    }
}

#[async_trait]
impl RateLimiterTrait for RedisRateLimiter {
    async fn check_rate_limit(
        &self,
        key: &str,
        max_requests: u32,
        window_seconds: u64,
    ) -> Result<RateLimitStatus, String> {
        let key = self.redis_client.key(&format!("rate_limit:{}", key));
        let mut conn = self.redis_client.get_connection();

        let now = Utc::now().timestamp_millis();
        let window_start = now - (window_seconds as i64 * 1000);

        let _: i64 = redis::cmd("ZREMRANGEBYSCORE")
            .arg(&key)
            .arg("-inf")
            .arg(window_start)
            .query_async(&mut conn)
            .await
            .map_err(|e| format!("Failed to prune rate limit window: {}", e))?;

        let count: u32 = conn
            .zcount(&key, window_start, "+inf")
            .await
            .map_err(|e| format!("Failed to count rate limit: {}", e))?;

        if count >= max_requests {
            let oldest: Vec<(String, i64)> = conn
                .zrangebyscore_limit_withscores(&key, window_start, "+inf", 0, 1)
                .await
                .map_err(|e| format!("Failed to get rate limit window: {}", e))?;

            let retry_after = oldest
                .first()
                .map(|(_, timestamp)| retry_after_seconds(*timestamp, now, window_seconds))
                .unwrap_or(window_seconds);

            tracing::debug!(key = %key, count, retry_after, "Rate limit reached");
            return Ok(RateLimitStatus::limited(retry_after));
        }

        conn.zadd::<_, _, _, ()>(&key, now.to_string(), now)
            .await
            .map_err(|e| format!("Failed to update rate limit: {}", e))?;
        conn.expire::<_, ()>(&key, window_seconds as i64)
            .await
            .map_err(|e| format!("Failed to set expiry: {}", e))?;

        Ok(RateLimitStatus::allowed(max_requests - count - 1))
    }
}

/// Seconds until the oldest request at `oldest_ms` leaves the window, at least 1
pub(crate) fn retry_after_seconds(oldest_ms: i64, now_ms: i64, window_seconds: u64) -> u64 {
    ((oldest_ms + window_seconds as i64 * 1000 - now_ms) / 1000).max(1) as u64
}
