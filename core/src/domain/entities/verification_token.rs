//! Verification token entity for email-based account flows.

use chrono::{DateTime, Duration, Utc};
use rand::{distributions::Alphanumeric, Rng};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::VerificationError;

/// Length of the random token string
pub const TOKEN_LENGTH: usize = 50;

/// Default lifetime of a verification token (5 minutes)
pub const DEFAULT_EXPIRATION_MINUTES: i64 = 5;

/// Why a verification token was issued.
///
/// The purpose decides which account mutation a successful redemption applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationPurpose {
    /// Confirms the address given at registration
    VerifyRegistration,
    /// Grants a session that may set a new password
    ForgotPassword,
    /// Confirms a new address for an existing account
    UpdateEmail,
}

impl VerificationPurpose {
    /// All recognized purposes
    pub const ALL: [VerificationPurpose; 3] = [
        VerificationPurpose::VerifyRegistration,
        VerificationPurpose::ForgotPassword,
        VerificationPurpose::UpdateEmail,
    ];

    /// Wire name used in links, query strings and the database
    pub fn as_str(&self) -> &'static str {
        match self {
            VerificationPurpose::VerifyRegistration => "verify_registration",
            VerificationPurpose::ForgotPassword => "forgot_password",
            VerificationPurpose::UpdateEmail => "update_email",
        }
    }
}

impl fmt::Display for VerificationPurpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VerificationPurpose {
    type Err = VerificationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|purpose| purpose.as_str() == s)
            .ok_or(VerificationError::InvalidPurpose)
    }
}

/// Category of subject a token belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ActorType {
    #[default]
    User,
}

impl ActorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActorType::User => "user",
        }
    }
}

impl fmt::Display for ActorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActorType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(ActorType::User),
            other => Err(format!("Unknown actor type: {}", other)),
        }
    }
}

/// One-time token bound to an email address and a purpose.
///
/// Rows are never deleted; `is_used` flips from `false` to `true` at most once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationToken {
    /// Database identifier, `None` until persisted
    pub id: Option<i64>,

    /// Random lookup key
    pub token: String,

    /// Address the token was issued for
    pub email: String,

    pub purpose: VerificationPurpose,

    pub actor_type: ActorType,

    /// Whether the token has been redeemed
    pub is_used: bool,

    /// Redemption after this instant is rejected
    pub expires_at: DateTime<Utc>,

    pub created_at: DateTime<Utc>,
}

impl VerificationToken {
    /// Creates a fresh token with the default 5 minute lifetime
    ///
    /// # Arguments
    ///
    /// * `email` - Address the token is bound to
    /// * `purpose` - Flow the token belongs to
    pub fn new(email: impl Into<String>, purpose: VerificationPurpose) -> Self {
        Self::new_with_expiration(email, purpose, DEFAULT_EXPIRATION_MINUTES)
    }

    /// Creates a fresh token with a custom lifetime
    ///
    /// # Arguments
    ///
    /// * `email` - Address the token is bound to
    /// * `purpose` - Flow the token belongs to
    /// * `expiration_minutes` - Minutes until the token expires
    pub fn new_with_expiration(
        email: impl Into<String>,
        purpose: VerificationPurpose,
        expiration_minutes: i64,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: None,
            token: Self::generate_token(TOKEN_LENGTH),
            email: email.into(),
            purpose,
            actor_type: ActorType::User,
            is_used: false,
            expires_at: now + Duration::minutes(expiration_minutes),
            created_at: now,
        }
    }

    /// Generates a random `[a-zA-Z0-9]` string of the given length
    pub fn generate_token(length: usize) -> String {
        rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(length)
            .map(char::from)
            .collect()
    }

    /// Checks whether the token has expired at `now`
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at < now
    }

    /// Checks whether the token has expired
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    /// Checks the token can still be redeemed.
    ///
    /// A used token reports [`VerificationError::TokenAlreadyUsed`] even when
    /// it has also expired.
    pub fn ensure_redeemable(&self, now: DateTime<Utc>) -> Result<(), VerificationError> {
        if self.is_used {
            return Err(VerificationError::TokenAlreadyUsed);
        }
        if self.is_expired_at(now) {
            return Err(VerificationError::TokenExpired);
        }
        Ok(())
    }

    /// Gets the time remaining until expiration, or zero if expired
    pub fn time_until_expiration(&self) -> Duration {
        let now = Utc::now();
        if self.expires_at > now {
            self.expires_at - now
        } else {
            Duration::zero()
        }
    }

    /// Marks the token as used
    pub fn mark_as_used(&mut self) {
        self.is_used = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_new_verification_token() {
        let token = VerificationToken::new("alice@example.com", VerificationPurpose::VerifyRegistration);

        assert_eq!(token.email, "alice@example.com");
        assert_eq!(token.token.len(), TOKEN_LENGTH);
        assert!(token.token.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_eq!(token.actor_type, ActorType::User);
        assert!(!token.is_used);
        assert!(!token.is_expired());
        assert!(token.id.is_none());
    }

    #[test]
    fn test_default_lifetime_is_five_minutes() {
        let token = VerificationToken::new("alice@example.com", VerificationPurpose::ForgotPassword);
        assert_eq!(token.expires_at - token.created_at, Duration::minutes(5));

        let remaining = token.time_until_expiration();
        assert!(remaining <= Duration::minutes(DEFAULT_EXPIRATION_MINUTES));
        assert!(remaining > Duration::minutes(DEFAULT_EXPIRATION_MINUTES - 1));
    }

    #[test]
    fn test_token_uniqueness() {
        let tokens: HashSet<String> = (0..100)
            .map(|_| VerificationToken::generate_token(TOKEN_LENGTH))
            .collect();
        assert_eq!(tokens.len(), 100);
    }

    #[test]
    fn test_used_check_precedes_expiry_check() {
        let mut token = VerificationToken::new_with_expiration(
            "alice@example.com",
            VerificationPurpose::UpdateEmail,
            -10,
        );
        assert_eq!(
            token.ensure_redeemable(Utc::now()),
            Err(VerificationError::TokenExpired)
        );

        token.mark_as_used();
        assert_eq!(
            token.ensure_redeemable(Utc::now()),
            Err(VerificationError::TokenAlreadyUsed)
        );
    }

    #[test]
    fn test_redeemable_token() {
        let token = VerificationToken::new("alice@example.com", VerificationPurpose::VerifyRegistration);
        assert!(token.ensure_redeemable(Utc::now()).is_ok());
        assert!(token.ensure_redeemable(token.expires_at + Duration::seconds(1)).is_err());
    }

    #[test]
    fn test_purpose_wire_names() {
        for purpose in VerificationPurpose::ALL {
            assert_eq!(purpose.as_str().parse::<VerificationPurpose>(), Ok(purpose));
        }
        assert_eq!(
            "register".parse::<VerificationPurpose>(),
            Err(VerificationError::InvalidPurpose)
        );
        assert_eq!(
            serde_json::to_string(&VerificationPurpose::ForgotPassword).unwrap(),
            "\"forgot_password\""
        );
    }

    #[test]
    fn test_serialization() {
        let token = VerificationToken::new("alice@example.com", VerificationPurpose::UpdateEmail);
        let json = serde_json::to_string(&token).unwrap();
        let deserialized: VerificationToken = serde_json::from_str(&json).unwrap();
        assert_eq!(token, deserialized);
    }
}
