//! Session credential entities for JWT-based authentication.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::verification_token::ActorType;

/// Claims carried by a session token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Account's external identifier
    pub user_identifier: String,

    pub email: String,

    /// Issuer, the actor type the session was issued to
    pub iss: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Unique token id
    pub jti: String,
}

impl SessionClaims {
    /// Creates claims valid for `lifetime` from now
    pub fn new(
        user_identifier: impl Into<String>,
        email: impl Into<String>,
        actor_type: ActorType,
        lifetime: Duration,
    ) -> Self {
        let now = Utc::now();
        Self {
            user_identifier: user_identifier.into(),
            email: email.into(),
            iss: actor_type.as_str().to_string(),
            iat: now.timestamp(),
            exp: (now + lifetime).timestamp(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or_else(Utc::now)
    }
}

/// Signed bearer credential handed to the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionCredential {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_lifetime() {
        let claims = SessionClaims::new(
            "USR20240101ABCDE",
            "alice@example.com",
            ActorType::User,
            Duration::days(30),
        );

        assert_eq!(claims.iss, "user");
        assert_eq!(claims.exp - claims.iat, Duration::days(30).num_seconds());
        assert_eq!(claims.expires_at().timestamp(), claims.exp);
        assert!(Uuid::parse_str(&claims.jti).is_ok());
    }
}
