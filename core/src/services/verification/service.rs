//! Main verification service implementation

use chrono::Utc;
use std::sync::Arc;

use crate::domain::entities::{AccountUpdate, VerificationPurpose, VerificationToken};
use crate::domain::value_objects::AuthSession;
use crate::errors::{DomainError, DomainResult, VerificationError};
use crate::repositories::{AccountRepository, VerificationRepository};

use super::config::VerificationServiceConfig;
use super::traits::{CredentialIssuer, MailDeliveryTrait, RateLimiterTrait};
use super::types::{MailMessage, MailTemplate};

const VERIFY_EMAIL_ROUTE: &str = "verify-email?token=";
const RESET_PASSWORD_ROUTE: &str = "reset-password?token=";
const TYPE_ROUTE: &str = "&type=";

/// Verification service for one-time email tokens
pub struct VerificationService<A, V, M, C>
where
    A: AccountRepository,
    V: VerificationRepository,
    M: MailDeliveryTrait,
    C: CredentialIssuer,
{
    accounts: Arc<A>,
    verifications: Arc<V>,
    mailer: Arc<M>,
    credentials: Arc<C>,
    rate_limiter: Option<Arc<dyn RateLimiterTrait>>,
    config: VerificationServiceConfig,
}

impl<A, V, M, C> VerificationService<A, V, M, C>
where
    A: AccountRepository,
    V: VerificationRepository,
    M: MailDeliveryTrait,
    C: CredentialIssuer,
{
    /// Create a new verification service
    ///
    /// # Arguments
    ///
    /// * `accounts` - Account lookups and the redemption target
    /// * `verifications` - Token storage
    /// * `mailer` - Delivers the redemption link
    /// * `credentials` - Issues the session credential returned by `redeem`
    /// * `config` - Service configuration
    pub fn new(
        accounts: Arc<A>,
        verifications: Arc<V>,
        mailer: Arc<M>,
        credentials: Arc<C>,
        config: VerificationServiceConfig,
    ) -> Self {
        Self {
            accounts,
            verifications,
            mailer,
            credentials,
            rate_limiter: None,
            config,
        }
    }

    /// Enable per-email rate limiting of token requests
    pub fn with_rate_limiter(mut self, rate_limiter: Arc<dyn RateLimiterTrait>) -> Self {
        self.rate_limiter = Some(rate_limiter);
        self
    }

    pub fn config(&self) -> &VerificationServiceConfig {
        &self.config
    }

    /// Issue a token for `email` and mail the verify-email link
    ///
    /// This method:
    /// 1. Resolves the account owning `email`
    /// 2. Applies the request rate limit, if configured
    /// 3. Sends the purpose-specific mail
    /// 4. Persists the token, only once delivery succeeded
    ///
    /// Earlier unused tokens for the same email and purpose stay valid.
    ///
    /// # Returns
    ///
    /// * `Ok(VerificationToken)` - The stored token
    /// * `Err(DomainError)` - `AccountNotFound`, `DeliveryFailed`, `RateLimitExceeded` or a storage failure
    pub async fn request_token(
        &self,
        email: &str,
        purpose: VerificationPurpose,
    ) -> DomainResult<VerificationToken> {
        let token = self.new_token(email, purpose);
        let link = format!(
            "{}{}{}{}{}",
            self.config.web_url, VERIFY_EMAIL_ROUTE, token.token, TYPE_ROUTE, purpose
        );
        self.issue(token, link, delivery_context(purpose)).await
    }

    /// Issue a forgot-password token and mail the reset-password link
    pub async fn request_password_reset(&self, email: &str) -> DomainResult<VerificationToken> {
        let purpose = VerificationPurpose::ForgotPassword;
        let token = self.new_token(email, purpose);
        let link = format!(
            "{}{}{}{}{}",
            self.config.web_url, RESET_PASSWORD_ROUTE, token.token, TYPE_ROUTE, purpose
        );
        self.issue(token, link, "reset password").await
    }

    /// Redeem a token exactly once
    ///
    /// The used check runs before the expiry check, so a spent token always
    /// reports `TokenAlreadyUsed`. Marking the token used and applying the
    /// purpose's account mutation commit together or not at all.
    ///
    /// # Returns
    ///
    /// * `Ok(AuthSession)` - The account after the mutation and a fresh credential
    /// * `Err(DomainError)` - One of the verification errors
    pub async fn redeem(&self, purpose: VerificationPurpose, token: &str) -> DomainResult<AuthSession> {
        let verification = self
            .verifications
            .find_by_token_and_purpose(token, purpose)
            .await
            .map_err(|e| {
                tracing::error!(
                    operation = "verification.redeem",
                    purpose = %purpose,
                    error = %e,
                    "Failed to load verification token"
                );
                DomainError::from(VerificationError::TransactionFailed)
            })?
            .ok_or(VerificationError::VerificationNotFound)?;

        verification.ensure_redeemable(Utc::now())?;

        let account = self
            .accounts
            .find_by_email(&verification.email)
            .await
            .map_err(|e| {
                tracing::error!(
                    operation = "verification.redeem",
                    error = %e,
                    "Failed to resolve account for verification token"
                );
                DomainError::from(VerificationError::AccountResolutionFailed)
            })?
            .ok_or(VerificationError::AccountResolutionFailed)?;

        // Discarded by the caller if the commit below fails
        let credential = self.credentials.issue(&account)?;

        let update = account_update_for(purpose, &verification.email);
        let account = self
            .verifications
            .consume(token, purpose, &account.user_identifier, &update)
            .await
            .map_err(|e| match e {
                DomainError::Verification(VerificationError::TokenAlreadyUsed) => {
                    tracing::warn!(
                        operation = "verification.redeem",
                        purpose = %purpose,
                        "Token was redeemed concurrently"
                    );
                    e
                }
                other => {
                    tracing::error!(
                        operation = "verification.redeem",
                        purpose = %purpose,
                        error = %other,
                        "Failed to commit token redemption"
                    );
                    VerificationError::TransactionFailed.into()
                }
            })?;

        tracing::info!(
            purpose = %purpose,
            user_identifier = %account.user_identifier,
            event = "token_redeemed",
            "Verification token redeemed"
        );

        Ok(AuthSession::new(account, credential))
    }

    fn new_token(&self, email: &str, purpose: VerificationPurpose) -> VerificationToken {
        let mut token =
            VerificationToken::new_with_expiration(email, purpose, self.config.expiration_minutes);
        token.token = VerificationToken::generate_token(self.config.token_length);
        token
    }

    async fn issue(
        &self,
        token: VerificationToken,
        link: String,
        context: &'static str,
    ) -> DomainResult<VerificationToken> {
        let account = self
            .accounts
            .find_by_email(&token.email)
            .await
            .map_err(|e| {
                tracing::error!(
                    operation = "verification.request_token",
                    error = %e,
                    "Failed to look up account by email"
                );
                DomainError::from(VerificationError::AccountNotFound)
            })?
            .ok_or(VerificationError::AccountNotFound)?;

        self.check_rate_limit(&token.email).await?;

        let message = MailMessage::new(
            MailTemplate::for_purpose(token.purpose),
            &token.email,
            &account.first_name,
            link,
        );
        self.mailer.send(&message).await.map_err(|e| {
            tracing::error!(
                operation = "verification.request_token",
                purpose = %token.purpose,
                error = %e,
                "Failed to deliver verification mail"
            );
            DomainError::from(VerificationError::DeliveryFailed { context })
        })?;

        let stored = self.verifications.insert(token).await.map_err(|e| {
            tracing::error!(
                operation = "verification.request_token",
                error = %e,
                "Failed to store verification token"
            );
            DomainError::internal("Error adding verification data")
        })?;

        tracing::info!(
            purpose = %stored.purpose,
            expires_at = %stored.expires_at,
            event = "token_issued",
            "Issued verification token"
        );

        Ok(stored)
    }

    async fn check_rate_limit(&self, email: &str) -> DomainResult<()> {
        let Some(rate_limiter) = &self.rate_limiter else {
            return Ok(());
        };

        let key = format!("token_request:{}", email);
        match rate_limiter
            .check_rate_limit(
                &key,
                self.config.max_requests_per_window,
                self.config.rate_limit_window_seconds,
            )
            .await
        {
            Ok(status) if status.allowed => Ok(()),
            Ok(status) => {
                tracing::warn!(
                    event = "rate_limit_exceeded",
                    retry_after = status.retry_after_seconds,
                    "Token request rate limit exceeded"
                );
                Err(DomainError::RateLimitExceeded {
                    retry_after_seconds: status.retry_after_seconds,
                })
            }
            Err(e) => {
                // Limiter outages must not block account flows
                tracing::warn!(error = %e, "Rate limiter unavailable, allowing request");
                Ok(())
            }
        }
    }
}

/// Account mutation applied when a token of `purpose` is redeemed
fn account_update_for(purpose: VerificationPurpose, email: &str) -> AccountUpdate {
    match purpose {
        VerificationPurpose::VerifyRegistration => AccountUpdate::verified(),
        VerificationPurpose::UpdateEmail => AccountUpdate::email_change(email),
        VerificationPurpose::ForgotPassword => AccountUpdate::none(),
    }
}

fn delivery_context(purpose: VerificationPurpose) -> &'static str {
    match purpose {
        VerificationPurpose::VerifyRegistration => "verify email",
        VerificationPurpose::ForgotPassword => "forgot password",
        VerificationPurpose::UpdateEmail => "update email",
    }
}
