use serde::{Deserialize, Serialize};

/// Registration form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterInput {
    pub first_name: String,
    pub last_name: Option<String>,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}
