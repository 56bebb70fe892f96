//! Account entity representing a registered user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::identifier::{generate_prefix_code, USER_PREFIX};

/// Registered user account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Database identifier, `None` until persisted
    pub id: Option<i64>,

    /// Stable external identifier (`USR` + date + 5 letters)
    pub user_identifier: String,

    pub first_name: String,

    pub last_name: Option<String>,

    pub email: String,

    pub avatar_url: Option<String>,

    pub description: Option<String>,

    /// bcrypt hash of the password
    #[serde(skip_serializing, default)]
    pub password_hash: String,

    /// Whether the email address has been confirmed
    pub is_verified: bool,

    pub created_at: DateTime<Utc>,

    pub updated_at: Option<DateTime<Utc>>,

    /// Soft-delete marker; deleted accounts are invisible to lookups
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Account {
    /// Creates a new, unverified account with a generated identifier
    pub fn new(
        first_name: impl Into<String>,
        last_name: Option<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            user_identifier: generate_prefix_code(USER_PREFIX),
            first_name: first_name.into(),
            last_name,
            email: email.into(),
            avatar_url: None,
            description: None,
            password_hash: password_hash.into(),
            is_verified: false,
            created_at: Utc::now(),
            updated_at: None,
            deleted_at: None,
        }
    }

    /// Applies a verification patch in memory
    pub fn apply(&mut self, update: &AccountUpdate) {
        if let Some(email) = &update.email {
            self.email = email.clone();
        }
        if let Some(is_verified) = update.is_verified {
            self.is_verified = is_verified;
        }
        if !update.is_empty() {
            self.updated_at = Some(Utc::now());
        }
    }

    /// Whether the account has been soft-deleted
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// Fields a successful redemption may change
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountUpdate {
    pub email: Option<String>,
    pub is_verified: Option<bool>,
}

impl AccountUpdate {
    /// No account mutation
    pub fn none() -> Self {
        Self::default()
    }

    /// Marks the account as verified
    pub fn verified() -> Self {
        Self {
            email: None,
            is_verified: Some(true),
        }
    }

    /// Moves the account to `email` and marks it verified
    pub fn email_change(email: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            is_verified: Some(true),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.is_verified.is_none()
    }
}

/// Editable profile fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub first_name: String,
    pub last_name: Option<String>,
    pub description: Option<String>,
    pub avatar_url: Option<String>,
}
