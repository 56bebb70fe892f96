//! CORS middleware configuration for cross-origin requests.
//!
//! The web client calls the API from its own origin. With no configured
//! origins any origin is accepted, which is what local development wants;
//! deployments list their web origins explicitly.

use actix_cors::Cors;
use actix_web::http::{header, Method};

use ve_shared::CorsConfig;

/// Creates a CORS middleware instance from configuration.
pub fn create_cors(config: &CorsConfig) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec![
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::HeaderName::from_static("x-channel"),
        ])
        .expose_headers(vec![header::RETRY_AFTER])
        .max_age(config.max_age);

    if config.allowed_origins.is_empty() {
        log::info!("Configuring CORS to allow any origin");
        cors = cors.allow_any_origin();
    } else {
        for origin in config.allowed_origins.iter().map(|s| s.trim()) {
            if !origin.is_empty() {
                log::info!("Adding allowed origin: {}", origin);
                cors = cors.allowed_origin(origin);
            }
        }
    }

    if config.allow_credentials {
        cors = cors.supports_credentials();
    }

    cors
}
