//! MySQL repository implementations

mod account_repository_impl;
mod address_repository_impl;
mod setting_repository_impl;
mod verification_repository_impl;

pub use account_repository_impl::MySqlAccountRepository;
pub use address_repository_impl::MySqlAddressRepository;
pub use setting_repository_impl::MySqlSettingRepository;
pub use verification_repository_impl::MySqlVerificationRepository;

use ve_core::errors::DomainError;

/// Build a `map_err` adapter for a failed query
pub(crate) fn storage_error(action: &'static str) -> impl FnOnce(sqlx::Error) -> DomainError {
    move |e| DomainError::Internal {
        message: format!("Failed to {}: {}", action, e),
    }
}

/// Build a `map_err` adapter for a column that could not be decoded
pub(crate) fn column_error(column: &'static str) -> impl FnOnce(sqlx::Error) -> DomainError {
    move |e| DomainError::Internal {
        message: format!("Failed to get {}: {}", column, e),
    }
}

pub(crate) fn is_unique_violation(error: &sqlx::Error) -> bool {
    matches!(error, sqlx::Error::Database(db) if db.is_unique_violation())
}
