//! Main token service implementation

use chrono::Duration;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::{Account, ActorType, SessionClaims, SessionCredential};
use crate::errors::{DomainError, TokenError};
use crate::services::verification::CredentialIssuer;

use super::config::TokenServiceConfig;

/// Service for issuing and verifying session JWTs
pub struct TokenService {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service instance
    ///
    /// # Returns
    ///
    /// * `Ok(TokenService)` - Ready to sign
    /// * `Err(TokenError::MissingSigningKey)` - The configured secret is empty
    pub fn new(config: TokenServiceConfig) -> Result<Self, DomainError> {
        if config.jwt_secret.trim().is_empty() {
            tracing::error!(operation = "token.new", "JWT signing key is not configured");
            return Err(TokenError::MissingSigningKey.into());
        }

        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(config.algorithm);
        validation.set_issuer(&[ActorType::User.as_str()]);
        validation.set_required_spec_claims(&["exp", "iss"]);
        validation.leeway = 0;

        Ok(Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        })
    }

    /// Session lifetime applied to newly issued tokens
    pub fn session_lifetime(&self) -> Duration {
        Duration::days(self.config.session_lifetime_days)
    }

    /// Signs a session token for an account
    ///
    /// # Arguments
    ///
    /// * `user_identifier` - The account's external identifier
    /// * `email` - The account's current email
    pub fn generate(&self, user_identifier: &str, email: &str) -> Result<SessionCredential, DomainError> {
        let claims = SessionClaims::new(user_identifier, email, ActorType::User, self.session_lifetime());
        let token = self.encode_jwt(&claims)?;
        Ok(SessionCredential {
            token,
            expires_at: claims.expires_at(),
        })
    }

    /// Encodes claims into a JWT
    pub(crate) fn encode_jwt(&self, claims: &SessionClaims) -> Result<String, DomainError> {
        let header = Header::new(self.config.algorithm);
        encode(&header, claims, &self.encoding_key).map_err(|e| {
            tracing::error!(operation = "token.encode", error = %e, "Failed to sign JWT");
            DomainError::Token(TokenError::TokenGenerationFailed)
        })
    }

    /// Verifies a session token and returns the claims
    ///
    /// # Returns
    ///
    /// * `Ok(SessionClaims)` - The decoded claims if valid
    /// * `Err(TokenError)` - Token is expired, tampered with or malformed
    pub fn verify(&self, token: &str) -> Result<SessionClaims, DomainError> {
        decode::<SessionClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => DomainError::Token(TokenError::TokenExpired),
                _ => DomainError::Token(TokenError::InvalidToken),
            })
    }
}

impl CredentialIssuer for TokenService {
    fn issue(&self, account: &Account) -> Result<SessionCredential, DomainError> {
        self.generate(&account.user_identifier, &account.email)
    }
}
