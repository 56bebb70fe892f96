//! Error types for the verification flow, authentication, session tokens and validation
//!
//! The `#[error]` strings double as the user-facing messages the API layer
//! returns, so they must not carry internal detail.

use thiserror::Error;

/// Failures of token issuance and redemption
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VerificationError {
    /// The email does not resolve to an account at issuance time
    #[error("Email/password is incorrect")]
    AccountNotFound,

    /// The delivery collaborator failed to send the token
    #[error("Error sending email for {context}")]
    DeliveryFailed { context: &'static str },

    /// No token exists for the (token, purpose) pair
    #[error("Data not found")]
    VerificationNotFound,

    #[error("Token has been used")]
    TokenAlreadyUsed,

    #[error("Token is expired")]
    TokenExpired,

    /// The token's email no longer resolves to an account
    #[error("Error getting user data")]
    AccountResolutionFailed,

    /// The mark-used / account update unit of work did not commit
    #[error("Error committing transaction")]
    TransactionFailed,

    #[error("Type must be one of the following: (verify_registration | forgot_password | update_email)")]
    InvalidPurpose,
}

/// Authentication-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Email/password is incorrect")]
    InvalidCredentials,

    #[error("Email not verified")]
    EmailNotVerified,

    #[error("Your email has been registered. Please change to a new email")]
    EmailAlreadyRegistered,

    #[error("Password does not match")]
    PasswordMismatch,

    #[error("Old password is incorrect")]
    OldPasswordIncorrect,

    #[error("Error hashing the new password")]
    HashingFailed,
}

/// Session token errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Config ['app.key'] doesn't exists")]
    MissingSigningKey,

    #[error("Token is expired")]
    TokenExpired,

    #[error("Token is invalid")]
    InvalidToken,

    #[error("Error generating JWT token")]
    TokenGenerationFailed,
}

/// Validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required field: {field}")]
    RequiredField { field: String },

    #[error("Invalid format: {field}")]
    InvalidFormat { field: String },

    #[error("Invalid email")]
    InvalidEmail,

    #[error("wrong content type value for settings(json_arr|json_obj|bool|string)")]
    InvalidContentType,
}
