//! Result of a flow that ends in an authenticated session.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Account, ActorType, SessionCredential};

/// Account plus the session credential issued for it.
///
/// Returned by login and by a successful token redemption. After a
/// redemption the account reflects the applied mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    pub account: Account,
    pub credential: SessionCredential,
    pub actor_type: ActorType,
}

impl AuthSession {
    pub fn new(account: Account, credential: SessionCredential) -> Self {
        Self {
            account,
            credential,
            actor_type: ActorType::User,
        }
    }
}
