//! Authentication route handlers
//!
//! Login, registration and the email token flow:
//! - `request-token` mails a one-time link for a purpose
//! - `verify-token` redeems it and answers with a fresh session
//! - `reset-password` sets a new password for the session's account

use std::str::FromStr;

use actix_web::{web, HttpResponse};
use validator::Validate;

use ve_core::domain::entities::VerificationPurpose;
use ve_core::errors::DomainError;
use ve_shared::{messages, ApiResponse};

use crate::app::{AppState, ServiceTypes};
use crate::dto::auth::{
    LoginRequest, LoginUserResponse, RegisterRequest, RegisterUserResponse, RequestTokenRequest,
    ResetPasswordRequest, VerifyTokenQuery,
};
use crate::handlers::error::ApiError;
use crate::middleware::auth::{AuthContext, JwtAuth};

pub fn configure<T: ServiceTypes>(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auths")
            .route("/login", web::post().to(login::<T>))
            .route("/register", web::post().to(register::<T>))
            .route("/request-token", web::post().to(request_token::<T>))
            .route("/verify-token", web::post().to(verify_token::<T>))
            .route(
                "/reset-password",
                web::post().to(reset_password::<T>).wrap(JwtAuth::new()),
            ),
    );
}

/// Handler for POST /v1/auths/login
pub async fn login<T: ServiceTypes>(
    state: web::Data<AppState<T>>,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError> {
    request.validate()?;

    let session = state.auth_service.login(&request.email, &request.password).await?;
    log::info!("User {} logged in", session.account.user_identifier);

    Ok(HttpResponse::Ok().json(ApiResponse::success(LoginUserResponse::from(&session))))
}

/// Handler for POST /v1/auths/register
///
/// Creates an unverified account and mails the registration link.
pub async fn register<T: ServiceTypes>(
    state: web::Data<AppState<T>>,
    request: web::Json<RegisterRequest>,
) -> Result<HttpResponse, ApiError> {
    request.validate()?;

    let account = state.auth_service.register(request.into_inner().into()).await?;
    log::info!("Registered user {}", account.user_identifier);

    Ok(HttpResponse::Ok().json(ApiResponse::success(RegisterUserResponse::from(&account))))
}

/// Handler for POST /v1/auths/request-token
pub async fn request_token<T: ServiceTypes>(
    state: web::Data<AppState<T>>,
    request: web::Json<RequestTokenRequest>,
) -> Result<HttpResponse, ApiError> {
    request.validate()?;
    let purpose = VerificationPurpose::from_str(&request.purpose).map_err(DomainError::from)?;

    state
        .verification_service
        .request_token(&request.email, purpose)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok()))
}

/// Handler for POST /v1/auths/verify-token?token=..&type=..
///
/// A missing `type` is rejected before the purpose is checked; a missing
/// `token` simply matches nothing.
pub async fn verify_token<T: ServiceTypes>(
    state: web::Data<AppState<T>>,
    query: web::Query<VerifyTokenQuery>,
) -> Result<HttpResponse, ApiError> {
    let query = query.into_inner();
    let purpose = match query.purpose.as_deref().filter(|purpose| !purpose.is_empty()) {
        Some(purpose) => VerificationPurpose::from_str(purpose).map_err(DomainError::from)?,
        None => return Err(ApiError::bad_request(messages::MISSING_TYPE_QUERY_PARAMETER)),
    };
    let token = query.token.unwrap_or_default();

    let session = state.verification_service.redeem(purpose, &token).await?;
    log::info!(
        "Redeemed {} token for user {}",
        purpose,
        session.account.user_identifier
    );

    Ok(HttpResponse::Ok().json(ApiResponse::success(LoginUserResponse::from(&session))))
}

/// Handler for POST /v1/auths/reset-password (requires JWT)
pub async fn reset_password<T: ServiceTypes>(
    state: web::Data<AppState<T>>,
    auth: AuthContext,
    request: web::Json<ResetPasswordRequest>,
) -> Result<HttpResponse, ApiError> {
    request.validate()?;

    state
        .auth_service
        .reset_password(&auth.user_identifier, &request.new_password, &request.confirm_password)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok()))
}
