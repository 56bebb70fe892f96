use ve_shared::types::{Pagination, SortOrder};

use crate::domain::entities::{NewSetting, Setting, SettingContentType};
use crate::domain::value_objects::SettingQuery;
use crate::repositories::setting::{MockSettingRepository, SettingRepository};

fn setting(key: &str, label: &str, order: i32, active: bool) -> Setting {
    Setting::new(NewSetting {
        set_group: "general".to_string(),
        set_key: key.to_string(),
        set_label: label.to_string(),
        set_order: order,
        content_type: SettingContentType::String,
        content_value: format!("{}-value", key),
        is_active: active,
    })
}

async fn seeded() -> MockSettingRepository {
    let repo = MockSettingRepository::new();
    for (i, key) in ["site_name", "site_logo", "support_email", "maintenance"].iter().enumerate() {
        repo.insert(setting(key, &key.replace('_', " "), 4 - i as i32, i != 3))
            .await
            .unwrap();
    }
    repo
}

#[tokio::test]
async fn test_list_filters_and_orders() {
    let repo = seeded().await;
    let query = SettingQuery {
        keyword: Some("SITE".to_string()),
        is_active: Some(true),
        ..Default::default()
    };

    let page = repo.list(&query).await.unwrap();
    assert_eq!(page.total, 2);
    let keys: Vec<_> = page.items.iter().map(|s| s.set_key.as_str()).collect();
    assert_eq!(keys, vec!["site_logo", "site_name"]);
}

#[tokio::test]
async fn test_list_descending_by_label() {
    let repo = seeded().await;
    let query = SettingQuery {
        sort: SortOrder::Desc,
        ..Default::default()
    }
    .with_order(Some("set_label"));

    let page = repo.list(&query).await.unwrap();
    assert_eq!(page.items[0].set_key, "support_email");
}

#[tokio::test]
async fn test_page_past_end_is_clamped() {
    let repo = seeded().await;
    let query = SettingQuery {
        pagination: Pagination::new(9, 3),
        ..Default::default()
    };

    let page = repo.list(&query).await.unwrap();
    assert_eq!(page.pagination.page, 2);
    assert_eq!(page.items.len(), 1);
}

#[tokio::test]
async fn test_value_by_key_ignores_inactive() {
    let repo = seeded().await;
    assert_eq!(
        repo.find_value_by_key("site_name").await.unwrap(),
        Some("site_name-value".to_string())
    );
    assert_eq!(repo.find_value_by_key("maintenance").await.unwrap(), None);
}
