//! Postal addresses owned by an account.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::identifier::{generate_prefix_code, USER_ADDRESS_PREFIX};

/// Address saved by a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAddress {
    pub id: Option<i64>,

    /// Owning account's database id
    pub user_id: i64,

    /// External identifier (`USRADR` + date + 5 letters)
    pub address_identifier: String,

    pub title: Option<String>,

    pub full_address: String,

    pub created_at: DateTime<Utc>,

    pub updated_at: Option<DateTime<Utc>>,

    pub deleted_at: Option<DateTime<Utc>>,
}

impl UserAddress {
    pub fn new(user_id: i64, title: Option<String>, full_address: impl Into<String>) -> Self {
        Self {
            id: None,
            user_id,
            address_identifier: generate_prefix_code(USER_ADDRESS_PREFIX),
            title,
            full_address: full_address.into(),
            created_at: Utc::now(),
            updated_at: None,
            deleted_at: None,
        }
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_address() {
        let address = UserAddress::new(7, Some("Home".to_string()), "1 Main Street");
        assert_eq!(address.user_id, 7);
        assert!(address.address_identifier.starts_with("USRADR"));
        assert!(!address.is_deleted());
    }
}
