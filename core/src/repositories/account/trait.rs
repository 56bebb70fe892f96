//! Account repository trait defining the interface for user persistence.

use async_trait::async_trait;

use crate::domain::entities::{Account, ProfileUpdate};
use crate::errors::DomainError;

/// Repository trait for Account persistence operations
///
/// Lookups never return soft-deleted accounts.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Find an account by email address
    ///
    /// # Returns
    /// * `Ok(Some(Account))` - Account found
    /// * `Ok(None)` - No live account uses this email
    /// * `Err(DomainError)` - Storage failure
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError>;

    /// Find an account by its external identifier
    async fn find_by_identifier(&self, user_identifier: &str) -> Result<Option<Account>, DomainError>;

    /// Persist a new account
    ///
    /// # Returns
    /// * `Ok(Account)` - The stored account with its database id
    /// * `Err(DomainError::Conflict)` - The email is already registered
    async fn create(&self, account: Account) -> Result<Account, DomainError>;

    /// Overwrite the profile fields; returns `false` if no account matched
    async fn update_profile(&self, user_identifier: &str, profile: &ProfileUpdate) -> Result<bool, DomainError>;

    /// Change the email address; returns `false` if no account matched
    async fn update_email(&self, user_identifier: &str, email: &str) -> Result<bool, DomainError>;

    /// Store a new password hash; returns `false` if no account matched
    async fn update_password(&self, user_identifier: &str, password_hash: &str) -> Result<bool, DomainError>;
}
