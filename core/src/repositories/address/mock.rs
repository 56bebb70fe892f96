//! In-memory implementation of AddressRepository

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::UserAddress;
use crate::errors::DomainError;

use super::r#trait::AddressRepository;

#[derive(Clone, Default)]
pub struct MockAddressRepository {
    addresses: Arc<RwLock<HashMap<String, UserAddress>>>,
    next_id: Arc<AtomicI64>,
}

impl MockAddressRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of an address, including soft-deleted ones
    pub async fn get(&self, address_identifier: &str) -> Option<UserAddress> {
        self.addresses.read().await.get(address_identifier).cloned()
    }
}

#[async_trait]
impl AddressRepository for MockAddressRepository {
    async fn list_by_user(&self, user_id: i64) -> Result<Vec<UserAddress>, DomainError> {
        let addresses = self.addresses.read().await;
        let mut owned: Vec<UserAddress> = addresses
            .values()
            .filter(|a| a.user_id == user_id && !a.is_deleted())
            .cloned()
            .collect();
        owned.sort_by_key(|a| a.id);
        Ok(owned)
    }

    async fn find_by_identifier(
        &self,
        user_id: i64,
        address_identifier: &str,
    ) -> Result<Option<UserAddress>, DomainError> {
        let addresses = self.addresses.read().await;
        Ok(addresses
            .get(address_identifier)
            .filter(|a| a.user_id == user_id && !a.is_deleted())
            .cloned())
    }

    async fn insert(&self, mut address: UserAddress) -> Result<UserAddress, DomainError> {
        address.id = Some(self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
        self.addresses
            .write()
            .await
            .insert(address.address_identifier.clone(), address.clone());
        Ok(address)
    }

    async fn update(
        &self,
        user_id: i64,
        address_identifier: &str,
        title: Option<&str>,
        full_address: &str,
    ) -> Result<bool, DomainError> {
        let mut addresses = self.addresses.write().await;
        match addresses.get_mut(address_identifier) {
            Some(address) if address.user_id == user_id && !address.is_deleted() => {
                address.title = title.map(str::to_string);
                address.full_address = full_address.to_string();
                address.updated_at = Some(Utc::now());
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn soft_delete(&self, user_id: i64, address_identifier: &str) -> Result<bool, DomainError> {
        let mut addresses = self.addresses.write().await;
        match addresses.get_mut(address_identifier) {
            Some(address) if address.user_id == user_id && !address.is_deleted() => {
                address.deleted_at = Some(Utc::now());
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}
