//! In-memory implementation of AccountRepository

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::{Account, ProfileUpdate};
use crate::errors::DomainError;

use super::r#trait::AccountRepository;

/// Mock account repository keyed by user identifier
#[derive(Clone, Default)]
pub struct MockAccountRepository {
    pub(crate) accounts: Arc<RwLock<HashMap<String, Account>>>,
    next_id: Arc<AtomicI64>,
}

impl MockAccountRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an account directly, bypassing duplicate checks
    pub async fn seed(&self, mut account: Account) -> Account {
        if account.id.is_none() {
            account.id = Some(self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
        }
        self.accounts
            .write()
            .await
            .insert(account.user_identifier.clone(), account.clone());
        account
    }

    /// Snapshot of an account, including soft-deleted ones
    pub async fn get(&self, user_identifier: &str) -> Option<Account> {
        self.accounts.read().await.get(user_identifier).cloned()
    }

    pub async fn len(&self) -> usize {
        self.accounts.read().await.len()
    }

    async fn modify<F>(&self, user_identifier: &str, change: F) -> bool
    where
        F: FnOnce(&mut Account),
    {
        let mut accounts = self.accounts.write().await;
        match accounts.get_mut(user_identifier) {
            Some(account) if !account.is_deleted() => {
                change(account);
                account.updated_at = Some(Utc::now());
                true
            }
            _ => false,
        }
    }
}

#[async_trait]
impl AccountRepository for MockAccountRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts
            .values()
            .find(|a| a.email == email && !a.is_deleted())
            .cloned())
    }

    async fn find_by_identifier(&self, user_identifier: &str) -> Result<Option<Account>, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts
            .get(user_identifier)
            .filter(|a| !a.is_deleted())
            .cloned())
    }

    async fn create(&self, account: Account) -> Result<Account, DomainError> {
        {
            let accounts = self.accounts.read().await;
            if accounts.values().any(|a| a.email == account.email) {
                return Err(DomainError::Conflict {
                    message: "users_email_key".to_string(),
                });
            }
        }
        Ok(self.seed(account).await)
    }

    async fn update_profile(&self, user_identifier: &str, profile: &ProfileUpdate) -> Result<bool, DomainError> {
        let profile = profile.clone();
        Ok(self
            .modify(user_identifier, move |account| {
                account.first_name = profile.first_name;
                account.last_name = profile.last_name;
                account.description = profile.description;
                account.avatar_url = profile.avatar_url;
            })
            .await)
    }

    async fn update_email(&self, user_identifier: &str, email: &str) -> Result<bool, DomainError> {
        let email = email.to_string();
        Ok(self
            .modify(user_identifier, move |account| account.email = email)
            .await)
    }

    async fn update_password(&self, user_identifier: &str, password_hash: &str) -> Result<bool, DomainError> {
        let password_hash = password_hash.to_string();
        Ok(self
            .modify(user_identifier, move |account| account.password_hash = password_hash)
            .await)
    }
}
