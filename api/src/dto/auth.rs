use chrono::Utc;
use serde::{Deserialize, Serialize};
use validator::Validate;

use ve_core::domain::entities::Account;
use ve_core::domain::value_objects::AuthSession;
use ve_core::services::RegisterInput;

use super::format_date;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,

    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "first_name is required"))]
    pub first_name: String,

    #[serde(default)]
    pub last_name: Option<String>,

    #[validate(email(message = "email is invalid"))]
    pub email: String,

    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,

    #[validate(length(min = 1, message = "confirm_password is required"))]
    pub confirm_password: String,
}

impl From<RegisterRequest> for RegisterInput {
    fn from(request: RegisterRequest) -> Self {
        RegisterInput {
            first_name: request.first_name,
            // Blank means absent
            last_name: request.last_name.filter(|name| !name.trim().is_empty()),
            email: request.email,
            password: request.password,
            confirm_password: request.confirm_password,
        }
    }
}

/// Ask for a token of the given purpose to be mailed
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RequestTokenRequest {
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,

    /// Wire name of the verification purpose
    #[serde(rename = "type")]
    #[validate(length(min = 1, message = "type is required"))]
    pub purpose: String,
}

/// Query string of `POST /auths/verify-token`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VerifyTokenQuery {
    #[serde(default)]
    pub token: Option<String>,

    #[serde(rename = "type", default)]
    pub purpose: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ResetPasswordRequest {
    #[validate(length(min = 1, message = "new_password is required"))]
    pub new_password: String,

    #[validate(length(min = 1, message = "confirm_password is required"))]
    pub confirm_password: String,
}

/// Session handed out by login and token redemption
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginUserResponse {
    pub token: String,
    pub user_identifier: String,
    pub avatar_url: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub expired_at: String,
    pub actor_type: String,
    pub created_date: String,
}

impl From<&AuthSession> for LoginUserResponse {
    fn from(session: &AuthSession) -> Self {
        let account = &session.account;
        Self {
            token: session.credential.token.clone(),
            user_identifier: account.user_identifier.clone(),
            avatar_url: account.avatar_url.clone().unwrap_or_default(),
            first_name: account.first_name.clone(),
            last_name: account.last_name.clone().unwrap_or_default(),
            email: account.email.clone(),
            expired_at: format_date(&session.credential.expires_at),
            actor_type: session.actor_type.as_str().to_string(),
            // Time the session was handed out
            created_date: format_date(&Utc::now()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterUserResponse {
    pub user_identifier: String,
    pub email: String,
    pub created_date: String,
}

impl From<&Account> for RegisterUserResponse {
    fn from(account: &Account) -> Self {
        Self {
            user_identifier: account.user_identifier.clone(),
            email: account.email.clone(),
            created_date: format_date(&account.created_at),
        }
    }
}
