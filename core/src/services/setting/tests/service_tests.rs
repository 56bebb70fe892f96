use std::sync::Arc;

use crate::domain::entities::{SettingContentType, SettingUpdate};
use crate::domain::value_objects::SettingQuery;
use crate::errors::{DomainError, ValidationError};
use crate::repositories::MockSettingRepository;
use crate::services::setting::{SettingInput, SettingService};

fn input(key: &str, content_type: &str) -> SettingInput {
    SettingInput {
        set_group: "general".to_string(),
        set_key: key.to_string(),
        set_label: "Maintenance mode".to_string(),
        set_order: 1,
        content_type: content_type.to_string(),
        content_value: "false".to_string(),
        is_active: true,
    }
}

fn service() -> SettingService<MockSettingRepository> {
    SettingService::new(Arc::new(MockSettingRepository::new()))
}

#[tokio::test]
async fn test_add_and_lookup() {
    let service = service();

    let setting = service.add(input("maintenance", "bool")).await.unwrap();
    assert_eq!(setting.content_type, SettingContentType::Bool);
    assert_eq!(setting.set_key, "maintenance");

    let by_code = service.get_by_code(&setting.setting_code).await.unwrap();
    assert_eq!(by_code.id, setting.id);
    assert_eq!(service.get_value_by_key("maintenance").await.unwrap(), "false");
}

#[tokio::test]
async fn test_add_rejects_unknown_content_type() {
    let result = service().add(input("maintenance", "yaml")).await;

    match result {
        Err(DomainError::ValidationErr(e)) => {
            assert_eq!(e, ValidationError::InvalidContentType);
            assert_eq!(
                e.to_string(),
                "wrong content type value for settings(json_arr|json_obj|bool|string)"
            );
        }
        other => panic!("expected content type error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_update_and_deactivate() {
    let service = service();
    let setting = service.add(input("maintenance", "bool")).await.unwrap();

    let updated = service
        .update(
            &setting.setting_code,
            SettingUpdate {
                set_key: "maintenance_mode".to_string(),
                set_label: "Maintenance".to_string(),
                set_order: 2,
                content_value: "true".to_string(),
                is_active: false,
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.set_key, "maintenance_mode");
    assert!(!updated.is_active);
    assert!(updated.updated_at.is_some());
    assert!(matches!(
        service.get_value_by_key("maintenance_mode").await,
        Err(DomainError::NotFound { .. })
    ));
}

#[tokio::test]
async fn test_update_unknown_code() {
    let result = service()
        .update(
            "SET-missing",
            SettingUpdate {
                set_key: "k".to_string(),
                set_label: "l".to_string(),
                set_order: 0,
                content_value: "v".to_string(),
                is_active: true,
            },
        )
        .await;
    assert!(matches!(result, Err(DomainError::NotFound { .. })));
}

#[tokio::test]
async fn test_list_counts_matches() {
    let service = service();
    for key in ["a", "b", "c"] {
        service.add(input(key, "string")).await.unwrap();
    }

    let page = service.list(&SettingQuery::default()).await.unwrap();
    assert_eq!(page.total, 3);
    assert_eq!(page.items.len(), 3);
}
