//! Verification token repository trait.

use async_trait::async_trait;

use crate::domain::entities::{Account, AccountUpdate, VerificationPurpose, VerificationToken};
use crate::errors::DomainError;

/// Repository trait for verification token persistence
///
/// Tokens are never deleted. The only state change a stored token ever sees
/// is `is_used` going from `false` to `true`, and that happens inside
/// [`VerificationRepository::consume`].
#[async_trait]
pub trait VerificationRepository: Send + Sync {
    /// Look up a token by its value and purpose
    ///
    /// A token issued for one purpose is invisible to lookups for another.
    ///
    /// # Returns
    /// * `Ok(Some(VerificationToken))` - Token found (used or not)
    /// * `Ok(None)` - No token with this value and purpose
    async fn find_by_token_and_purpose(
        &self,
        token: &str,
        purpose: VerificationPurpose,
    ) -> Result<Option<VerificationToken>, DomainError>;

    /// Persist a newly issued token
    async fn insert(&self, token: VerificationToken) -> Result<VerificationToken, DomainError>;

    /// Redeem a token and apply its account mutation as one unit of work
    ///
    /// The token is marked used only if it is currently unused. When another
    /// redemption got there first nothing is changed and
    /// `VerificationError::TokenAlreadyUsed` is returned. Any other failure
    /// rolls back both writes.
    ///
    /// # Arguments
    /// * `token` - Token value being redeemed
    /// * `purpose` - Purpose the token was looked up under
    /// * `user_identifier` - Account the mutation applies to
    /// * `update` - Account fields to change, possibly none
    ///
    /// # Returns
    /// * `Ok(Account)` - The account as it stands after the commit
    async fn consume(
        &self,
        token: &str,
        purpose: VerificationPurpose,
        user_identifier: &str,
        update: &AccountUpdate,
    ) -> Result<Account, DomainError>;
}
