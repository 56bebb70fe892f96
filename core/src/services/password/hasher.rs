use crate::errors::{AuthError, DomainError};

/// One-way password hashing
pub trait PasswordHasher: Send + Sync {
    /// Hash `password` with the given work factor
    fn hash(&self, password: &str, cost: u32) -> Result<String, DomainError>;

    /// Check `password` against a stored hash
    fn verify(&self, password: &str, hash: &str) -> Result<bool, DomainError>;
}

/// bcrypt implementation of [`PasswordHasher`]
#[derive(Debug, Clone, Copy, Default)]
pub struct BcryptPasswordHasher;

impl PasswordHasher for BcryptPasswordHasher {
    fn hash(&self, password: &str, cost: u32) -> Result<String, DomainError> {
        bcrypt::hash(password, cost).map_err(|e| {
            tracing::error!(operation = "password.hash", error = %e, "Failed to hash password");
            DomainError::Auth(AuthError::HashingFailed)
        })
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, DomainError> {
        // A malformed stored hash is treated as a mismatch
        match bcrypt::verify(password, hash) {
            Ok(matches) => Ok(matches),
            Err(e) => {
                tracing::warn!(operation = "password.verify", error = %e, "Stored password hash is invalid");
                Ok(false)
            }
        }
    }
}
