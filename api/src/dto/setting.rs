use serde::{Deserialize, Serialize};
use validator::Validate;

use ve_core::domain::entities::{Setting, SettingUpdate};
use ve_core::domain::value_objects::SettingQuery;
use ve_core::services::SettingInput;
use ve_shared::{Pagination, SortOrder};

/// Body of `POST /settings` and `PUT /settings/{code}`
///
/// `content_type` is fixed at creation; updates ignore it.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SettingRequest {
    #[serde(default)]
    pub set_group: String,

    #[validate(length(min = 1, message = "set_key is required"))]
    pub set_key: String,

    #[validate(length(min = 1, message = "set_label is required"))]
    pub set_label: String,

    #[serde(default)]
    pub set_order: i32,

    #[serde(default)]
    pub content_type: String,

    #[serde(default)]
    pub content_value: String,

    #[serde(default)]
    pub is_active: bool,
}

impl From<SettingRequest> for SettingInput {
    fn from(request: SettingRequest) -> Self {
        SettingInput {
            set_group: request.set_group,
            set_key: request.set_key,
            set_label: request.set_label,
            set_order: request.set_order,
            content_type: request.content_type,
            content_value: request.content_value,
            is_active: request.is_active,
        }
    }
}

impl From<SettingRequest> for SettingUpdate {
    fn from(request: SettingRequest) -> Self {
        SettingUpdate {
            set_key: request.set_key,
            set_label: request.set_label,
            set_order: request.set_order,
            content_value: request.content_value,
            is_active: request.is_active,
        }
    }
}

/// Query string of `GET /settings`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SettingListQuery {
    pub keyword: Option<String>,
    pub is_active: Option<bool>,
    pub set_group: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub order: Option<String>,
    pub sort: Option<String>,
}

impl From<SettingListQuery> for SettingQuery {
    fn from(query: SettingListQuery) -> Self {
        let defaults = Pagination::default();
        let mut setting_query = SettingQuery::default().with_order(query.order.as_deref());
        setting_query.keyword = query.keyword;
        setting_query.is_active = query.is_active;
        setting_query.set_group = query.set_group.filter(|group| !group.trim().is_empty());
        setting_query.pagination = Pagination::new(
            query.page.unwrap_or(defaults.page),
            query.limit.unwrap_or(defaults.limit),
        );
        setting_query.sort = SortOrder::parse_or_default(query.sort.as_deref());
        setting_query
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingResponse {
    pub setting_code: String,
    pub set_group: String,
    pub set_key: String,
    pub set_label: String,
    pub set_order: i32,
    pub content_type: String,
    pub content_value: String,
    pub is_active: bool,
}

impl From<&Setting> for SettingResponse {
    fn from(setting: &Setting) -> Self {
        Self {
            setting_code: setting.setting_code.clone(),
            set_group: setting.set_group.clone(),
            set_key: setting.set_key.clone(),
            set_label: setting.set_label.clone(),
            set_order: setting.set_order,
            content_type: setting.content_type.as_str().to_string(),
            content_value: setting.content_value.clone(),
            is_active: setting.is_active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_query_defaults() {
        let query = SettingQuery::from(SettingListQuery::default());
        assert_eq!(query.pagination.page, 1);
        assert_eq!(query.pagination.limit, 10);
        assert_eq!(query.order_column(), "set_order");
        assert_eq!(query.sort, SortOrder::Asc);
    }

    #[test]
    fn test_list_query_whitelists_order() {
        let query = SettingQuery::from(SettingListQuery {
            order: Some("created_date".to_string()),
            sort: Some("desc".to_string()),
            page: Some(0),
            ..Default::default()
        });
        assert_eq!(query.order_column(), "created_date");
        assert_eq!(query.sort, SortOrder::Desc);
        assert_eq!(query.pagination.page, 1);

        let query = SettingQuery::from(SettingListQuery {
            order: Some("password".to_string()),
            ..Default::default()
        });
        assert_eq!(query.order_column(), "set_order");
    }

    #[test]
    fn test_update_ignores_content_type() {
        let request: SettingRequest = serde_json::from_str(
            r#"{"set_key":"theme","set_label":"Theme","content_value":"dark","is_active":true}"#,
        )
        .unwrap();
        assert!(request.validate().is_ok());

        let update = SettingUpdate::from(request);
        assert_eq!(update.content_value, "dark");
        assert!(update.is_active);
    }
}
