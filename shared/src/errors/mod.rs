//! Shared error types and response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Standard error response structure used across all API endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for client identification
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// Additional error details (field errors, etc.)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, serde_json::Value>>,

    /// Timestamp when the error occurred
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            details: None,
            timestamp: Utc::now(),
        }
    }

    /// Create an error response with details
    pub fn with_details(
        error: impl Into<String>,
        message: impl Into<String>,
        details: HashMap<String, serde_json::Value>,
    ) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            details: Some(details),
            timestamp: Utc::now(),
        }
    }

    /// Add a detail field to the error response
    pub fn add_detail(mut self, key: impl Into<String>, value: impl Serialize) -> Self {
        let details = self.details.get_or_insert_with(HashMap::new);
        if let Ok(json_value) = serde_json::to_value(value) {
            details.insert(key.into(), json_value);
        }
        self
    }
}

/// Common error codes used across the application
pub mod error_codes {
    pub const UNAUTHORIZED: &str = "UNAUTHORIZED";
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const BAD_REQUEST: &str = "BAD_REQUEST";
    pub const CONFLICT: &str = "CONFLICT";
    pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
    pub const RATE_LIMIT_EXCEEDED: &str = "RATE_LIMIT_EXCEEDED";
    pub const TOKEN_INVALID: &str = "TOKEN_INVALID";
    pub const TOKEN_EXPIRED: &str = "TOKEN_EXPIRED";
    pub const TOKEN_USED: &str = "TOKEN_USED";
    pub const VERIFICATION_NOT_FOUND: &str = "VERIFICATION_NOT_FOUND";
    pub const INVALID_PURPOSE: &str = "INVALID_PURPOSE";
    pub const DELIVERY_FAILED: &str = "DELIVERY_FAILED";
    pub const TRANSACTION_FAILED: &str = "TRANSACTION_FAILED";
}

/// User-facing messages returned by the API
pub mod messages {
    pub const EMPTY_DATA: &str = "Data not found";
    pub const NOT_FOUND_PAGE: &str = "Sorry. We couldn't find that page";
    pub const SYSTEM_ERROR: &str = "Something error with our system. Please contact our administrator";
    pub const INVALID_TOKEN: &str = "Token is invalid";
    pub const CONFIG_KEY_NOT_FOUND: &str = "Config ['app.key'] doesn't exists";
    pub const EMAIL_ALREADY_REGISTERED: &str =
        "Your email has been registered. Please change to a new email";
    pub const EMAIL_NOT_VERIFIED: &str = "Email not verified";
    pub const INVALID_EMAIL_PASSWORD: &str = "Email/password is incorrect";
    pub const GETTING_VERIFICATIONS_DATA: &str = "Error getting data from verifications table";
    pub const TOKEN_EXPIRED: &str = "Token is expired";
    pub const TOKEN_USED: &str = "Token has been used";
    pub const GETTING_USER_DATA: &str = "Error getting user data";
    pub const COMMITTING_TRANSACTION: &str = "Error committing transaction";
    pub const SENDING_VERIFY_EMAIL: &str = "Error sending email for verify email";
    pub const INVALID_VERIFICATION_TYPE: &str =
        "Type must be one of the following: (verify_registration | forgot_password | update_email)";
    pub const MISSING_TYPE_QUERY_PARAMETER: &str = "Type query parameter is missing";
    pub const PASSWORD_MISMATCH: &str = "Password does not match";
    pub const OLD_PASSWORD_INCORRECT: &str = "Old password is incorrect";
    pub const INVALID_SETTING_CONTENT_TYPE: &str =
        "wrong content type value for settings(json_arr|json_obj|bool|string)";
    pub const TOO_MANY_REQUESTS: &str = "Too many requests. Please try again later";
}
