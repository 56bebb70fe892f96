//! Application state and factory
//!
//! This module wires repositories and collaborators into the core services
//! and provides the factory for creating the Actix-web application.

use std::collections::HashMap;
use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpResponse};

use ve_core::errors::DomainError;
use ve_core::repositories::{AccountRepository, AddressRepository, SettingRepository, VerificationRepository};
use ve_core::services::{
    AuthService, AuthServiceConfig, BcryptPasswordHasher, MailDeliveryTrait, RateLimiterTrait, SettingService,
    TokenService, TokenServiceConfig, UserService, VerificationService, VerificationServiceConfig,
};
use ve_infra::database::{
    MySqlAccountRepository, MySqlAddressRepository, MySqlSettingRepository, MySqlVerificationRepository,
};
use ve_infra::mail::MailService;
use ve_shared::types::HealthStatus;
use ve_shared::{error_codes, messages, ApiResponse, AppConfig, CorsConfig, ErrorResponse, HealthResponse};

use crate::handlers::error::{json_error_handler, query_error_handler};
use crate::middleware::cors::create_cors;
use crate::routes;

/// Concrete collaborator types the application is assembled from
///
/// Handlers are generic over this bundle so the same routes run against
/// MySQL in production and the in-memory repositories in tests.
pub trait ServiceTypes: 'static {
    type Accounts: AccountRepository + 'static;
    type Verifications: VerificationRepository + 'static;
    type Addresses: AddressRepository + 'static;
    type Settings: SettingRepository + 'static;
    type Mailer: MailDeliveryTrait + 'static;
}

/// Production wiring: MySQL repositories and the configured mailer
pub struct MySqlServices;

impl ServiceTypes for MySqlServices {
    type Accounts = MySqlAccountRepository;
    type Verifications = MySqlVerificationRepository;
    type Addresses = MySqlAddressRepository;
    type Settings = MySqlSettingRepository;
    type Mailer = MailService;
}

pub type AppVerificationService<T> = VerificationService<
    <T as ServiceTypes>::Accounts,
    <T as ServiceTypes>::Verifications,
    <T as ServiceTypes>::Mailer,
    TokenService,
>;

pub type AppAuthService<T> = AuthService<
    <T as ServiceTypes>::Accounts,
    <T as ServiceTypes>::Verifications,
    <T as ServiceTypes>::Mailer,
    TokenService,
    BcryptPasswordHasher,
>;

/// Repositories and collaborators handed to [`AppState::new`]
pub struct Repositories<T: ServiceTypes> {
    pub accounts: Arc<T::Accounts>,
    pub verifications: Arc<T::Verifications>,
    pub addresses: Arc<T::Addresses>,
    pub settings: Arc<T::Settings>,
    pub mailer: Arc<T::Mailer>,
}

/// Application state that holds shared services
pub struct AppState<T: ServiceTypes> {
    pub auth_service: Arc<AppAuthService<T>>,
    pub verification_service: Arc<AppVerificationService<T>>,
    pub user_service: Arc<UserService<T::Accounts, T::Addresses>>,
    pub setting_service: Arc<SettingService<T::Settings>>,
    pub token_service: Arc<TokenService>,
}

impl<T: ServiceTypes> AppState<T> {
    /// Build every service from the repositories and the application config
    ///
    /// Fails when no session signing key is configured.
    pub fn new(
        repositories: Repositories<T>,
        config: &AppConfig,
        rate_limiter: Option<Arc<dyn RateLimiterTrait>>,
    ) -> Result<Self, DomainError> {
        let token_service = Arc::new(TokenService::new(TokenServiceConfig::from(&config.auth.jwt))?);

        let verification_config = VerificationServiceConfig {
            max_requests_per_window: config.rate_limit.token_requests_per_window,
            rate_limit_window_seconds: config.rate_limit.window_seconds,
            ..Default::default()
        }
        .with_web_url(config.mail.web_url.clone());

        let mut verification_service = VerificationService::new(
            repositories.accounts.clone(),
            repositories.verifications,
            repositories.mailer,
            token_service.clone(),
            verification_config,
        );
        if let Some(rate_limiter) = rate_limiter {
            verification_service = verification_service.with_rate_limiter(rate_limiter);
        }
        let verification_service = Arc::new(verification_service);

        let auth_service = Arc::new(AuthService::new(
            repositories.accounts.clone(),
            verification_service.clone(),
            token_service.clone(),
            Arc::new(BcryptPasswordHasher),
            AuthServiceConfig::from(&config.auth),
        ));

        Ok(Self {
            auth_service,
            verification_service,
            user_service: Arc::new(UserService::new(repositories.accounts, repositories.addresses)),
            setting_service: Arc::new(SettingService::new(repositories.settings)),
            token_service,
        })
    }
}

/// Register the `/v1` routes
pub fn configure<T: ServiceTypes>(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/v1")
            .route("/ping", web::get().to(ping))
            .configure(routes::auth::configure::<T>)
            .configure(routes::users::configure::<T>)
            .configure(routes::settings::configure::<T>),
    );
}

/// Create and configure the application with all dependencies
pub fn create_app<T: ServiceTypes>(
    app_state: web::Data<AppState<T>>,
    cors_config: &CorsConfig,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    // The JWT middleware looks the token service up on its own
    let token_service = web::Data::from(app_state.token_service.clone());

    App::new()
        .app_data(app_state)
        .app_data(token_service)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .wrap(create_cors(cors_config))
        .wrap(Logger::default())
        .route("/health", web::get().to(health_check))
        .configure(configure::<T>)
        .default_service(web::route().to(not_found))
}

/// Liveness probe
async fn ping() -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::success("pong"))
}

/// Health check endpoint
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: HealthStatus::Healthy,
        services: HashMap::new(),
        timestamp: chrono::Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(error_codes::NOT_FOUND, messages::NOT_FOUND_PAGE))
}
