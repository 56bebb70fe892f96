//! Key/value application settings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::identifier::generate_setting_code;
use crate::errors::ValidationError;

/// How a setting's `content_value` should be interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettingContentType {
    JsonArr,
    JsonObj,
    Bool,
    String,
}

impl SettingContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SettingContentType::JsonArr => "json_arr",
            SettingContentType::JsonObj => "json_obj",
            SettingContentType::Bool => "bool",
            SettingContentType::String => "string",
        }
    }
}

impl fmt::Display for SettingContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SettingContentType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json_arr" => Ok(SettingContentType::JsonArr),
            "json_obj" => Ok(SettingContentType::JsonObj),
            "bool" => Ok(SettingContentType::Bool),
            "string" => Ok(SettingContentType::String),
            _ => Err(ValidationError::InvalidContentType),
        }
    }
}

/// A single configuration entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Setting {
    pub id: Option<i64>,
    /// Public code (`SET-` + 20 chars)
    pub setting_code: String,
    pub set_group: String,
    pub set_key: String,
    pub set_label: String,
    pub set_order: i32,
    pub content_type: SettingContentType,
    pub content_value: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Input for creating a setting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSetting {
    pub set_group: String,
    pub set_key: String,
    pub set_label: String,
    pub set_order: i32,
    pub content_type: SettingContentType,
    pub content_value: String,
    pub is_active: bool,
}

impl Setting {
    pub fn new(input: NewSetting) -> Self {
        Self {
            id: None,
            setting_code: generate_setting_code(),
            set_group: input.set_group,
            set_key: input.set_key,
            set_label: input.set_label,
            set_order: input.set_order,
            content_type: input.content_type,
            content_value: input.content_value,
            is_active: input.is_active,
            created_at: Utc::now(),
            updated_at: None,
        }
    }
}

/// Mutable fields of an existing setting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingUpdate {
    pub set_key: String,
    pub set_label: String,
    pub set_order: i32,
    pub content_value: String,
    pub is_active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_parsing() {
        assert_eq!("json_obj".parse::<SettingContentType>(), Ok(SettingContentType::JsonObj));
        assert_eq!("bool".parse::<SettingContentType>(), Ok(SettingContentType::Bool));
        assert_eq!(
            "yaml".parse::<SettingContentType>(),
            Err(ValidationError::InvalidContentType)
        );
    }

    #[test]
    fn test_new_setting_gets_code() {
        let setting = Setting::new(NewSetting {
            set_group: "general".to_string(),
            set_key: "maintenance".to_string(),
            set_label: "Maintenance mode".to_string(),
            set_order: 1,
            content_type: SettingContentType::Bool,
            content_value: "false".to_string(),
            is_active: true,
        });

        assert!(setting.setting_code.starts_with("SET-"));
        assert_eq!(setting.content_type.to_string(), "bool");
    }
}
