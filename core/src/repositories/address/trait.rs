//! Address repository trait.

use async_trait::async_trait;

use crate::domain::entities::UserAddress;
use crate::errors::DomainError;

/// Repository trait for user addresses
///
/// Soft-deleted addresses are excluded from every read.
#[async_trait]
pub trait AddressRepository: Send + Sync {
    /// All live addresses owned by `user_id`, oldest first
    async fn list_by_user(&self, user_id: i64) -> Result<Vec<UserAddress>, DomainError>;

    /// Find a live address by identifier, scoped to its owner
    async fn find_by_identifier(
        &self,
        user_id: i64,
        address_identifier: &str,
    ) -> Result<Option<UserAddress>, DomainError>;

    async fn insert(&self, address: UserAddress) -> Result<UserAddress, DomainError>;

    /// Overwrite title and full address; returns `false` if nothing matched
    async fn update(
        &self,
        user_id: i64,
        address_identifier: &str,
        title: Option<&str>,
        full_address: &str,
    ) -> Result<bool, DomainError>;

    /// Set the deletion timestamp; returns `false` if nothing matched
    async fn soft_delete(&self, user_id: i64, address_identifier: &str) -> Result<bool, DomainError>;
}
