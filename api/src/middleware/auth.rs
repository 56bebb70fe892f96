//! JWT authentication middleware for protecting API endpoints.
//!
//! This middleware extracts the bearer token from the Authorization header,
//! verifies it with the [`TokenService`] registered as app data, and injects
//! the caller's [`AuthContext`] into the request extensions.

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::header::AUTHORIZATION,
    web, Error, FromRequest, HttpMessage, HttpRequest, ResponseError,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    task::{Context, Poll},
};

use ve_core::domain::entities::SessionClaims;
use ve_core::services::TokenService;
use ve_shared::messages;

use crate::handlers::error::ApiError;

/// Authenticated caller, taken from the session token claims
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    pub user_identifier: String,
    pub email: String,
}

impl From<SessionClaims> for AuthContext {
    fn from(claims: SessionClaims) -> Self {
        Self {
            user_identifier: claims.user_identifier,
            email: claims.email,
        }
    }
}

/// JWT authentication middleware factory
#[derive(Debug, Clone, Copy, Default)]
pub struct JwtAuth;

impl JwtAuth {
    pub fn new() -> Self {
        Self
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            match authenticate(&req) {
                Ok(auth_context) => {
                    req.extensions_mut().insert(auth_context);
                    service.call(req).await.map(ServiceResponse::map_into_left_body)
                }
                // Answer here so the 401 still flows back through the outer middleware
                Err(error) => {
                    let response = error.error_response();
                    Ok(req.into_response(response).map_into_right_body())
                }
            }
        })
    }
}

fn authenticate(req: &ServiceRequest) -> Result<AuthContext, ApiError> {
    let token = extract_bearer_token(req).ok_or_else(|| ApiError::unauthorized(messages::INVALID_TOKEN))?;

    let token_service = req.app_data::<web::Data<TokenService>>().ok_or_else(|| {
        log::error!("Token service is not registered as app data");
        ApiError::unauthorized(messages::INVALID_TOKEN)
    })?;

    let claims = token_service.verify(&token)?;
    Ok(AuthContext::from(claims))
}

/// Extracts Bearer token from Authorization header
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|s| s.to_string())
}

/// Extractor for required authentication
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| ApiError::unauthorized(messages::INVALID_TOKEN).into());

        ready(result)
    }
}
