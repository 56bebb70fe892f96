use std::sync::Arc;

use crate::domain::entities::{Account, ProfileUpdate, UserAddress};
use crate::errors::{AuthError, DomainError, DomainResult, ValidationError};
use crate::repositories::{AccountRepository, AddressRepository};
use ve_shared::validation::validators;

const ADDRESS_NOT_FOUND: &str = "address";

/// Profile and address service, always scoped to the calling account
pub struct UserService<A, D>
where
    A: AccountRepository,
    D: AddressRepository,
{
    accounts: Arc<A>,
    addresses: Arc<D>,
}

impl<A, D> UserService<A, D>
where
    A: AccountRepository,
    D: AddressRepository,
{
    pub fn new(accounts: Arc<A>, addresses: Arc<D>) -> Self {
        Self { accounts, addresses }
    }

    pub async fn get_profile(&self, user_identifier: &str) -> DomainResult<Account> {
        self.accounts
            .find_by_identifier(user_identifier)
            .await
            .map_err(|e| {
                tracing::error!(operation = "user.get_profile", error = %e, "Failed to load account");
                DomainError::internal("Error getting user data")
            })?
            .ok_or_else(|| DomainError::not_found("user"))
    }

    /// Overwrite the editable profile fields and return the refreshed account
    pub async fn update_profile(&self, user_identifier: &str, profile: ProfileUpdate) -> DomainResult<Account> {
        if profile.first_name.trim().is_empty() {
            return Err(ValidationError::RequiredField {
                field: "first_name".to_string(),
            }
            .into());
        }

        let updated = self
            .accounts
            .update_profile(user_identifier, &profile)
            .await
            .map_err(|e| {
                tracing::error!(operation = "user.update_profile", error = %e, "Failed to update profile");
                DomainError::internal("Error updating user profile")
            })?;
        if !updated {
            return Err(DomainError::not_found("user"));
        }
        self.get_profile(user_identifier).await
    }

    /// Move the account to a new address
    ///
    /// The caller is expected to request an `update_email` token for the new
    /// address afterwards; redeeming it marks the address verified.
    pub async fn update_email(&self, user_identifier: &str, email: &str) -> DomainResult<Account> {
        if !validators::is_valid_email(email) {
            return Err(ValidationError::InvalidEmail.into());
        }

        let owner = self.accounts.find_by_email(email).await.map_err(|e| {
            tracing::error!(operation = "user.update_email", error = %e, "Failed to check email");
            DomainError::internal("Error getting user data")
        })?;
        match owner {
            Some(owner) if owner.user_identifier != user_identifier => {
                return Err(AuthError::EmailAlreadyRegistered.into());
            }
            Some(_) => return self.get_profile(user_identifier).await,
            None => {}
        }

        let updated = self
            .accounts
            .update_email(user_identifier, email)
            .await
            .map_err(|e| match e {
                DomainError::Conflict { .. } => DomainError::from(AuthError::EmailAlreadyRegistered),
                other => {
                    tracing::error!(operation = "user.update_email", error = %other, "Failed to update email");
                    DomainError::internal("Error updating user email")
                }
            })?;
        if !updated {
            return Err(DomainError::not_found("user"));
        }
        self.get_profile(user_identifier).await
    }

    pub async fn list_addresses(&self, user_identifier: &str) -> DomainResult<Vec<UserAddress>> {
        let user_id = self.account_id(user_identifier).await?;
        self.addresses.list_by_user(user_id).await.map_err(|e| {
            tracing::error!(operation = "user.list_addresses", error = %e, "Failed to list addresses");
            DomainError::internal("Error getting address data")
        })
    }

    pub async fn get_address(&self, user_identifier: &str, address_identifier: &str) -> DomainResult<UserAddress> {
        let user_id = self.account_id(user_identifier).await?;
        self.find_address(user_id, address_identifier).await
    }

    pub async fn add_address(
        &self,
        user_identifier: &str,
        title: Option<String>,
        full_address: &str,
    ) -> DomainResult<UserAddress> {
        require_full_address(full_address)?;
        let user_id = self.account_id(user_identifier).await?;

        let address = UserAddress::new(user_id, title, full_address);
        self.addresses.insert(address).await.map_err(|e| {
            tracing::error!(operation = "user.add_address", error = %e, "Failed to add address");
            DomainError::internal("Error adding address data")
        })
    }

    pub async fn update_address(
        &self,
        user_identifier: &str,
        address_identifier: &str,
        title: Option<String>,
        full_address: &str,
    ) -> DomainResult<UserAddress> {
        require_full_address(full_address)?;
        let user_id = self.account_id(user_identifier).await?;
        self.find_address(user_id, address_identifier).await?;

        let updated = self
            .addresses
            .update(user_id, address_identifier, title.as_deref(), full_address)
            .await
            .map_err(|e| {
                tracing::error!(operation = "user.update_address", error = %e, "Failed to update address");
                DomainError::internal("Error updating address data")
            })?;
        if !updated {
            return Err(DomainError::not_found(ADDRESS_NOT_FOUND));
        }
        self.find_address(user_id, address_identifier).await
    }

    /// Soft-delete an address
    pub async fn delete_address(&self, user_identifier: &str, address_identifier: &str) -> DomainResult<()> {
        let user_id = self.account_id(user_identifier).await?;
        self.find_address(user_id, address_identifier).await?;

        let deleted = self
            .addresses
            .soft_delete(user_id, address_identifier)
            .await
            .map_err(|e| {
                tracing::error!(operation = "user.delete_address", error = %e, "Failed to delete address");
                DomainError::internal("Error deleting address data")
            })?;
        if !deleted {
            return Err(DomainError::not_found(ADDRESS_NOT_FOUND));
        }
        Ok(())
    }

    async fn account_id(&self, user_identifier: &str) -> DomainResult<i64> {
        let account = self.get_profile(user_identifier).await?;
        account
            .id
            .ok_or_else(|| DomainError::internal("Account has no database id"))
    }

    async fn find_address(&self, user_id: i64, address_identifier: &str) -> DomainResult<UserAddress> {
        self.addresses
            .find_by_identifier(user_id, address_identifier)
            .await
            .map_err(|e| {
                tracing::error!(operation = "user.find_address", error = %e, "Failed to load address");
                DomainError::internal("Error getting address data")
            })?
            .ok_or_else(|| DomainError::not_found(ADDRESS_NOT_FOUND))
    }
}

fn require_full_address(full_address: &str) -> DomainResult<()> {
    if !validators::not_empty(full_address) {
        return Err(ValidationError::RequiredField {
            field: "full_address".to_string(),
        }
        .into());
    }
    Ok(())
}
