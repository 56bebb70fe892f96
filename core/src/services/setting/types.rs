use serde::{Deserialize, Serialize};

use crate::domain::entities::{NewSetting, SettingContentType};
use crate::errors::ValidationError;

/// Setting as submitted by a client, content type still unchecked
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingInput {
    pub set_group: String,
    pub set_key: String,
    pub set_label: String,
    pub set_order: i32,
    pub content_type: String,
    pub content_value: String,
    pub is_active: bool,
}

impl TryFrom<SettingInput> for NewSetting {
    type Error = ValidationError;

    fn try_from(input: SettingInput) -> Result<Self, Self::Error> {
        let content_type: SettingContentType = input.content_type.parse()?;
        Ok(NewSetting {
            set_group: input.set_group,
            set_key: input.set_key,
            set_label: input.set_label,
            set_order: input.set_order,
            content_type,
            content_value: input.content_value,
            is_active: input.is_active,
        })
    }
}
