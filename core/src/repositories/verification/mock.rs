//! In-memory implementation of VerificationRepository

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::{Account, AccountUpdate, VerificationPurpose, VerificationToken};
use crate::errors::{DomainError, VerificationError};
use crate::repositories::account::MockAccountRepository;

use super::r#trait::VerificationRepository;

/// Mock verification repository sharing account storage with a
/// [`MockAccountRepository`] so that `consume` can update both atomically.
#[derive(Clone)]
pub struct MockVerificationRepository {
    tokens: Arc<RwLock<HashMap<String, VerificationToken>>>,
    accounts: MockAccountRepository,
    next_id: Arc<AtomicI64>,
    fail_account_update: Arc<AtomicBool>,
    fail_lookup: Arc<AtomicBool>,
}

impl MockVerificationRepository {
    /// Create a repository backed by `accounts`
    pub fn new(accounts: MockAccountRepository) -> Self {
        Self {
            tokens: Arc::new(RwLock::new(HashMap::new())),
            accounts,
            next_id: Arc::new(AtomicI64::new(0)),
            fail_account_update: Arc::new(AtomicBool::new(false)),
            fail_lookup: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Make the account half of `consume` fail, forcing a rollback
    pub fn set_fail_account_update(&self, fail: bool) {
        self.fail_account_update.store(fail, Ordering::SeqCst);
    }

    /// Make token lookups fail as if storage were unreachable
    pub fn set_fail_lookup(&self, fail: bool) {
        self.fail_lookup.store(fail, Ordering::SeqCst);
    }

    /// All stored tokens, in no particular order
    pub async fn all(&self) -> Vec<VerificationToken> {
        self.tokens.read().await.values().cloned().collect()
    }

    /// Snapshot of a stored token
    pub async fn get(&self, token: &str) -> Option<VerificationToken> {
        self.tokens.read().await.get(token).cloned()
    }

    pub async fn len(&self) -> usize {
        self.tokens.read().await.len()
    }
}

#[async_trait]
impl VerificationRepository for MockVerificationRepository {
    async fn find_by_token_and_purpose(
        &self,
        token: &str,
        purpose: VerificationPurpose,
    ) -> Result<Option<VerificationToken>, DomainError> {
        if self.fail_lookup.load(Ordering::SeqCst) {
            return Err(DomainError::internal("simulated lookup failure"));
        }
        let tokens = self.tokens.read().await;
        Ok(tokens.get(token).filter(|t| t.purpose == purpose).cloned())
    }

    async fn insert(&self, mut token: VerificationToken) -> Result<VerificationToken, DomainError> {
        let mut tokens = self.tokens.write().await;
        if tokens.contains_key(&token.token) {
            return Err(DomainError::Conflict {
                message: "verifications_token_key".to_string(),
            });
        }
        token.id = Some(self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
        tokens.insert(token.token.clone(), token.clone());
        Ok(token)
    }

    async fn consume(
        &self,
        token: &str,
        purpose: VerificationPurpose,
        user_identifier: &str,
        update: &AccountUpdate,
    ) -> Result<Account, DomainError> {
        // Lock order: tokens, then accounts. Both are held until commit.
        let mut tokens = self.tokens.write().await;
        let mut accounts = self.accounts.accounts.write().await;

        let stored = match tokens.get_mut(token) {
            Some(stored) if stored.purpose == purpose => stored,
            _ => return Err(VerificationError::VerificationNotFound.into()),
        };
        if stored.is_used {
            return Err(VerificationError::TokenAlreadyUsed.into());
        }

        let account = accounts
            .get(user_identifier)
            .filter(|a| !a.is_deleted())
            .ok_or_else(|| DomainError::internal("account disappeared during redemption"))?;

        if self.fail_account_update.load(Ordering::SeqCst) {
            return Err(DomainError::internal("simulated account update failure"));
        }

        let mut updated = account.clone();
        updated.apply(update);

        if let Some(email) = &update.email {
            let taken = accounts
                .values()
                .any(|a| a.email == *email && a.user_identifier != user_identifier);
            if taken {
                return Err(DomainError::Conflict {
                    message: "users_email_key".to_string(),
                });
            }
        }

        // Commit both writes
        stored.mark_as_used();
        accounts.insert(user_identifier.to_string(), updated.clone());

        Ok(updated)
    }
}
