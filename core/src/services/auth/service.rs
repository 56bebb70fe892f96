//! Main authentication service implementation

use std::sync::Arc;

use crate::domain::entities::{Account, VerificationPurpose};
use crate::domain::value_objects::AuthSession;
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::{AccountRepository, VerificationRepository};
use crate::services::password::{BcryptPasswordHasher, PasswordHasher};
use crate::services::verification::{
    CredentialIssuer, MailDeliveryTrait, VerificationService,
};

use super::config::AuthServiceConfig;
use super::types::RegisterInput;

/// Authentication service for registration, login and password changes
pub struct AuthService<A, V, M, C, H = BcryptPasswordHasher>
where
    A: AccountRepository,
    V: VerificationRepository,
    M: MailDeliveryTrait,
    C: CredentialIssuer,
    H: PasswordHasher,
{
    /// Account repository for user persistence
    accounts: Arc<A>,
    /// Sends the registration confirmation token
    verification_service: Arc<VerificationService<A, V, M, C>>,
    /// Issues the session credential on login
    credentials: Arc<C>,
    hasher: Arc<H>,
    config: AuthServiceConfig,
}

impl<A, V, M, C, H> AuthService<A, V, M, C, H>
where
    A: AccountRepository,
    V: VerificationRepository,
    M: MailDeliveryTrait,
    C: CredentialIssuer,
    H: PasswordHasher,
{
    /// Create a new authentication service
    ///
    /// # Arguments
    ///
    /// * `accounts` - Repository for account persistence
    /// * `verification_service` - Service issuing the confirmation token
    /// * `credentials` - Session credential issuer
    /// * `hasher` - Password hasher
    /// * `config` - Service configuration
    pub fn new(
        accounts: Arc<A>,
        verification_service: Arc<VerificationService<A, V, M, C>>,
        credentials: Arc<C>,
        hasher: Arc<H>,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            accounts,
            verification_service,
            credentials,
            hasher,
            config,
        }
    }

    /// Register a new, unverified account and mail its confirmation link
    ///
    /// # Returns
    ///
    /// * `Ok(Account)` - The stored account
    /// * `Err(DomainError)` - Password mismatch, duplicate email, or a token issuance failure
    pub async fn register(&self, input: RegisterInput) -> DomainResult<Account> {
        if input.password != input.confirm_password {
            return Err(AuthError::PasswordMismatch.into());
        }

        let existing = self.accounts.find_by_email(&input.email).await.map_err(|e| {
            tracing::error!(operation = "auth.register", error = %e, "Failed to check email");
            DomainError::internal("Error getting user data")
        })?;
        if existing.is_some() {
            return Err(AuthError::EmailAlreadyRegistered.into());
        }

        let password_hash = self.hasher.hash(&input.password, self.config.bcrypt_cost)?;
        let account = Account::new(input.first_name, input.last_name, input.email, password_hash);

        let account = self.accounts.create(account).await.map_err(|e| match e {
            DomainError::Conflict { .. } => DomainError::from(AuthError::EmailAlreadyRegistered),
            other => {
                tracing::error!(operation = "auth.register", error = %other, "Failed to create account");
                DomainError::internal("Error registering user")
            }
        })?;

        tracing::info!(
            user_identifier = %account.user_identifier,
            event = "account_registered",
            "Registered new account"
        );

        self.verification_service
            .request_token(&account.email, VerificationPurpose::VerifyRegistration)
            .await?;

        Ok(account)
    }

    /// Authenticate with email and password
    ///
    /// Unknown email and wrong password report the same error.
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<AuthSession> {
        let account = self
            .accounts
            .find_by_email(email)
            .await
            .map_err(|e| {
                tracing::error!(operation = "auth.login", error = %e, "Failed to look up account");
                DomainError::from(AuthError::InvalidCredentials)
            })?
            .ok_or(AuthError::InvalidCredentials)?;

        if !self.hasher.verify(password, &account.password_hash)? {
            tracing::warn!(event = "login_failed", "Password mismatch on login");
            return Err(AuthError::InvalidCredentials.into());
        }

        if !account.is_verified {
            return Err(AuthError::EmailNotVerified.into());
        }

        let credential = self.credentials.issue(&account)?;
        Ok(AuthSession::new(account, credential))
    }

    /// Set a new password after a forgot-password redemption
    pub async fn reset_password(
        &self,
        user_identifier: &str,
        new_password: &str,
        confirm_password: &str,
    ) -> DomainResult<()> {
        if new_password != confirm_password {
            return Err(AuthError::PasswordMismatch.into());
        }

        let account = self.load_account(user_identifier, "auth.reset_password").await?;
        let password_hash = self.hasher.hash(new_password, self.config.bcrypt_cost)?;
        self.store_password(&account.user_identifier, &password_hash, "auth.reset_password")
            .await
    }

    /// Change the password of a signed-in user
    pub async fn update_password(
        &self,
        user_identifier: &str,
        old_password: &str,
        new_password: &str,
        confirm_password: &str,
    ) -> DomainResult<()> {
        if new_password != confirm_password {
            return Err(AuthError::PasswordMismatch.into());
        }

        let account = self.load_account(user_identifier, "auth.update_password").await?;
        if !self.hasher.verify(old_password, &account.password_hash)? {
            return Err(AuthError::OldPasswordIncorrect.into());
        }

        let password_hash = self
            .hasher
            .hash(new_password, self.config.password_change_cost)?;
        self.store_password(&account.user_identifier, &password_hash, "auth.update_password")
            .await
    }

    async fn load_account(&self, user_identifier: &str, operation: &'static str) -> DomainResult<Account> {
        self.accounts
            .find_by_identifier(user_identifier)
            .await
            .map_err(|e| {
                tracing::error!(operation, error = %e, "Failed to load account");
                DomainError::internal("Error getting user data")
            })?
            .ok_or_else(|| DomainError::not_found("user"))
    }

    async fn store_password(
        &self,
        user_identifier: &str,
        password_hash: &str,
        operation: &'static str,
    ) -> DomainResult<()> {
        let updated = self
            .accounts
            .update_password(user_identifier, password_hash)
            .await
            .map_err(|e| {
                tracing::error!(operation, error = %e, "Failed to store password");
                DomainError::internal("Error updating user password")
            })?;
        if !updated {
            return Err(DomainError::not_found("user"));
        }
        tracing::info!(user_identifier, event = "password_changed", "Password updated");
        Ok(())
    }
}
