use serde::{Deserialize, Serialize};
use validator::Validate;

use ve_core::domain::entities::{Account, ProfileUpdate, UserAddress};

use super::{format_date, format_optional_date};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, message = "first_name is required"))]
    pub first_name: String,

    #[serde(default)]
    pub last_name: Option<String>,

    #[serde(default)]
    pub avatar_url: Option<String>,

    #[serde(default)]
    pub description: Option<String>,
}

impl From<UpdateProfileRequest> for ProfileUpdate {
    fn from(request: UpdateProfileRequest) -> Self {
        ProfileUpdate {
            first_name: request.first_name,
            last_name: non_blank(request.last_name),
            description: non_blank(request.description),
            avatar_url: non_blank(request.avatar_url),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdatePasswordRequest {
    #[validate(length(min = 1, message = "old_password is required"))]
    pub old_password: String,

    #[validate(length(min = 1, message = "new_password is required"))]
    pub new_password: String,

    #[validate(length(min = 1, message = "confirm_password is required"))]
    pub confirm_password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UserAddressRequest {
    #[serde(default)]
    pub title: Option<String>,

    #[validate(length(min = 1, message = "full_address is required"))]
    pub full_address: String,
}

impl UserAddressRequest {
    pub fn title(&self) -> Option<String> {
        non_blank(self.title.clone())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfileResponse {
    pub user_identifier: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub avatar_url: String,
    pub description: String,
    pub is_verify: bool,
    pub created_date: String,
    pub updated_date: String,
}

impl From<&Account> for UserProfileResponse {
    fn from(account: &Account) -> Self {
        Self {
            user_identifier: account.user_identifier.clone(),
            first_name: account.first_name.clone(),
            last_name: account.last_name.clone().unwrap_or_default(),
            email: account.email.clone(),
            avatar_url: account.avatar_url.clone().unwrap_or_default(),
            description: account.description.clone().unwrap_or_default(),
            is_verify: account.is_verified,
            created_date: format_date(&account.created_at),
            updated_date: format_optional_date(account.updated_at.as_ref()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAddressResponse {
    pub address_identifier: String,
    pub title: String,
    pub full_address: String,
    pub created_date: String,
    pub updated_date: String,
}

impl From<&UserAddress> for UserAddressResponse {
    fn from(address: &UserAddress) -> Self {
        Self {
            address_identifier: address.address_identifier.clone(),
            title: address.title.clone().unwrap_or_default(),
            full_address: address.full_address.clone(),
            created_date: format_date(&address.created_at),
            updated_date: format_optional_date(address.updated_at.as_ref()),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_update_drops_blank_fields() {
        let update = ProfileUpdate::from(UpdateProfileRequest {
            first_name: "Alice".to_string(),
            last_name: Some(String::new()),
            avatar_url: None,
            description: Some("Gardener".to_string()),
        });
        assert_eq!(update.last_name, None);
        assert_eq!(update.description.as_deref(), Some("Gardener"));
    }

    #[test]
    fn test_profile_response_uses_empty_strings() {
        let account = Account::new("Alice", None, "alice@example.com", "hash");
        let json = serde_json::to_value(UserProfileResponse::from(&account)).unwrap();

        assert_eq!(json["last_name"], "");
        assert_eq!(json["updated_date"], "");
        assert_eq!(json["is_verify"], false);
        assert!(json.get("password").is_none());
    }

    #[test]
    fn test_address_request_blank_title() {
        let request: UserAddressRequest =
            serde_json::from_str(r#"{"title":" ","full_address":"1 Main St"}"#).unwrap();
        assert_eq!(request.title(), None);
        assert!(request.validate().is_ok());
    }
}
