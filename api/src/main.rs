use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use log::{info, warn};

use ve_api::app::Repositories;
use ve_api::{create_app, AppState, MySqlServices};
use ve_core::services::RateLimiterTrait;
use ve_infra::cache::{RedisClient, RedisRateLimiter};
use ve_infra::database::{
    DatabasePool, MySqlAccountRepository, MySqlAddressRepository, MySqlSettingRepository,
    MySqlVerificationRepository,
};
use ve_infra::mail::MailService;
use ve_shared::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    ve_infra::load_env();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = AppConfig::from_env();
    info!("Starting Verity API Server ({:?})", config.environment);
    if config.auth.jwt.is_using_default_secret() {
        warn!("APP_KEY is not set, sessions are signed with the development secret");
    }

    let database = DatabasePool::new(config.database.clone())
        .await
        .context("failed to connect to the database")?;
    info!("Database pool ready: {}", database.get_statistics());
    let pool = database.get_pool().clone();

    let mailer = MailService::from_config(&config.mail);
    info!("Using {} mail provider", mailer.provider_name());

    let repositories = Repositories::<MySqlServices> {
        accounts: Arc::new(MySqlAccountRepository::new(pool.clone())),
        verifications: Arc::new(MySqlVerificationRepository::new(pool.clone())),
        addresses: Arc::new(MySqlAddressRepository::new(pool.clone())),
        settings: Arc::new(MySqlSettingRepository::new(pool)),
        mailer: Arc::new(mailer),
    };

    let rate_limiter = create_rate_limiter(&config).await;
    let state = AppState::new(repositories, &config, rate_limiter).context("failed to build services")?;
    let state = web::Data::new(state);

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let cors = config.cors.clone();
    let mut server = HttpServer::new(move || create_app(state.clone(), &cors));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server.bind(&bind_address)?.run().await?;

    database.close().await;
    Ok(())
}

/// Redis-backed limiter for token requests, when enabled and reachable
///
/// The server still starts without Redis; token requests are then unlimited.
async fn create_rate_limiter(config: &AppConfig) -> Option<Arc<dyn RateLimiterTrait>> {
    if !config.rate_limit.enabled {
        return None;
    }
    let Some(cache) = config.cache.clone() else {
        warn!("Rate limiting is enabled but no cache is configured");
        return None;
    };

    match RedisClient::new(cache).await {
        Ok(client) => Some(Arc::new(RedisRateLimiter::new(Arc::new(client)))),
        Err(e) => {
            warn!("Redis unavailable, token requests are not rate limited: {}", e);
            None
        }
    }
}
