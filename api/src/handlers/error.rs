//! Mapping from domain errors to HTTP responses
//!
//! Every failure leaves the API as an [`ErrorResponse`]. Token-flow and
//! account errors carry their user-facing message with a 400; internal
//! failures are logged and answered with a generic 500.

use std::collections::{BTreeMap, HashMap};

use actix_web::{
    error::{JsonPayloadError, QueryPayloadError},
    http::{header, StatusCode},
    HttpRequest, HttpResponse, ResponseError,
};
use thiserror::Error;

use ve_core::errors::{AuthError, DomainError, TokenError, VerificationError};
use ve_shared::{error_codes, messages, ErrorResponse};

/// Error returned by handlers and the JWT middleware
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Malformed or invalid request data
    #[error("{message}")]
    BadRequest {
        message: String,
        details: Option<HashMap<String, serde_json::Value>>,
    },

    #[error("{0}")]
    Unauthorized(String),
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest {
            message: message.into(),
            details: None,
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        ApiError::Unauthorized(message.into())
    }

    /// Status, error code and client-safe message
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            ApiError::Domain(error) => domain_parts(error),
            ApiError::BadRequest { message, .. } => {
                (StatusCode::BAD_REQUEST, error_codes::VALIDATION_ERROR, message.clone())
            }
            ApiError::Unauthorized(message) => (StatusCode::UNAUTHORIZED, error_codes::UNAUTHORIZED, message.clone()),
        }
    }
}

fn domain_parts(error: &DomainError) -> (StatusCode, &'static str, String) {
    match error {
        DomainError::Verification(e) => (StatusCode::BAD_REQUEST, verification_code(e), e.to_string()),
        DomainError::Auth(AuthError::HashingFailed) => internal(),
        DomainError::Auth(e) => (StatusCode::BAD_REQUEST, error_codes::BAD_REQUEST, e.to_string()),
        DomainError::Token(TokenError::TokenExpired) => {
            (StatusCode::UNAUTHORIZED, error_codes::TOKEN_EXPIRED, messages::TOKEN_EXPIRED.to_string())
        }
        DomainError::Token(TokenError::InvalidToken) => {
            (StatusCode::UNAUTHORIZED, error_codes::TOKEN_INVALID, messages::INVALID_TOKEN.to_string())
        }
        DomainError::Token(_) => internal(),
        DomainError::ValidationErr(e) => (StatusCode::BAD_REQUEST, error_codes::VALIDATION_ERROR, e.to_string()),
        DomainError::Validation { message } => {
            (StatusCode::BAD_REQUEST, error_codes::VALIDATION_ERROR, message.clone())
        }
        DomainError::NotFound { .. } => (StatusCode::NOT_FOUND, error_codes::NOT_FOUND, messages::EMPTY_DATA.to_string()),
        DomainError::Conflict { message } => (StatusCode::CONFLICT, error_codes::CONFLICT, message.clone()),
        DomainError::Unauthorized => {
            (StatusCode::UNAUTHORIZED, error_codes::UNAUTHORIZED, messages::INVALID_TOKEN.to_string())
        }
        DomainError::RateLimitExceeded { .. } => (
            StatusCode::TOO_MANY_REQUESTS,
            error_codes::RATE_LIMIT_EXCEEDED,
            messages::TOO_MANY_REQUESTS.to_string(),
        ),
        DomainError::Internal { .. } => internal(),
    }
}

fn verification_code(error: &VerificationError) -> &'static str {
    match error {
        VerificationError::VerificationNotFound => error_codes::VERIFICATION_NOT_FOUND,
        VerificationError::TokenAlreadyUsed => error_codes::TOKEN_USED,
        VerificationError::TokenExpired => error_codes::TOKEN_EXPIRED,
        VerificationError::InvalidPurpose => error_codes::INVALID_PURPOSE,
        VerificationError::DeliveryFailed { .. } => error_codes::DELIVERY_FAILED,
        VerificationError::TransactionFailed => error_codes::TRANSACTION_FAILED,
        VerificationError::AccountNotFound | VerificationError::AccountResolutionFailed => error_codes::BAD_REQUEST,
    }
}

fn internal() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        error_codes::INTERNAL_ERROR,
        messages::SYSTEM_ERROR.to_string(),
    )
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        self.parts().0
    }

    fn error_response(&self) -> HttpResponse {
        let (status, code, message) = self.parts();
        if status.is_server_error() {
            log::error!("Request failed: {:?}", self);
        } else {
            log::debug!("Request rejected ({}): {}", status, self);
        }

        let mut body = ErrorResponse::new(code, message.clone());
        let mut response = HttpResponse::build(status);

        match self {
            ApiError::BadRequest {
                details: Some(details), ..
            } => body = ErrorResponse::with_details(code, message, details.clone()),
            ApiError::Domain(DomainError::RateLimitExceeded { retry_after_seconds }) => {
                response.insert_header((header::RETRY_AFTER, retry_after_seconds.to_string()));
                body = body.add_detail("retry_after_seconds", retry_after_seconds);
            }
            _ => {}
        }

        response.json(body)
    }
}

impl From<validator::ValidationErrors> for ApiError {
    /// The first failing field (by name) becomes the message; every field's
    /// messages are listed in the details.
    fn from(errors: validator::ValidationErrors) -> Self {
        let by_field: BTreeMap<String, Vec<String>> = errors
            .field_errors()
            .into_iter()
            .map(|(field, errors)| {
                let messages = errors
                    .iter()
                    .map(|e| {
                        e.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| format!("{} is invalid", field))
                    })
                    .collect();
                (field.to_string(), messages)
            })
            .collect();

        let message = by_field
            .values()
            .flat_map(|messages| messages.first())
            .next()
            .cloned()
            .unwrap_or_else(|| "Invalid request data".to_string());

        let details = by_field
            .into_iter()
            .map(|(field, messages)| (field, serde_json::json!(messages)))
            .collect();

        ApiError::BadRequest {
            message,
            details: Some(details),
        }
    }
}

/// Malformed JSON bodies answer with an [`ErrorResponse`] instead of plain text
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::bad_request(err.to_string()).into()
}

pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::bad_request(err.to_string()).into()
}
