//! In-memory implementation of SettingRepository

use async_trait::async_trait;
use chrono::Utc;
use std::cmp::Ordering as CmpOrdering;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use ve_shared::types::SortOrder;

use crate::domain::entities::{Setting, SettingUpdate};
use crate::domain::value_objects::SettingQuery;
use crate::errors::DomainError;

use super::r#trait::{SettingPage, SettingRepository};

/// Mock setting repository, kept in insertion order
#[derive(Clone, Default)]
pub struct MockSettingRepository {
    settings: Arc<RwLock<Vec<Setting>>>,
    next_id: Arc<AtomicI64>,
}

impl MockSettingRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn matches(setting: &Setting, query: &SettingQuery) -> bool {
        if let Some(keyword) = query.keyword() {
            let keyword = keyword.to_lowercase();
            if !setting.set_label.to_lowercase().contains(&keyword)
                && !setting.content_value.to_lowercase().contains(&keyword)
            {
                return false;
            }
        }
        if let Some(is_active) = query.is_active {
            if setting.is_active != is_active {
                return false;
            }
        }
        if let Some(group) = &query.set_group {
            if &setting.set_group != group {
                return false;
            }
        }
        true
    }

    fn compare(a: &Setting, b: &Setting, column: &str) -> CmpOrdering {
        match column {
            "set_label" => a.set_label.cmp(&b.set_label),
            "set_group" => a.set_group.cmp(&b.set_group),
            "set_key" => a.set_key.cmp(&b.set_key),
            "created_date" => a.created_at.cmp(&b.created_at),
            _ => a.set_order.cmp(&b.set_order),
        }
    }
}

#[async_trait]
impl SettingRepository for MockSettingRepository {
    async fn list(&self, query: &SettingQuery) -> Result<SettingPage, DomainError> {
        let settings = self.settings.read().await;
        let mut matched: Vec<Setting> = settings
            .iter()
            .filter(|s| Self::matches(s, query))
            .cloned()
            .collect();

        let column = query.order_column();
        matched.sort_by(|a, b| {
            let ordering = Self::compare(a, b, column);
            match query.sort {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });

        let total = matched.len() as u64;
        let pagination = query.pagination.clamp_to_total(total);
        let items = matched
            .into_iter()
            .skip(usize::try_from(pagination.offset()).unwrap_or(usize::MAX))
            .take(pagination.limit as usize)
            .collect();

        Ok(SettingPage {
            items,
            total,
            pagination,
        })
    }

    async fn find_by_code(&self, setting_code: &str) -> Result<Option<Setting>, DomainError> {
        let settings = self.settings.read().await;
        Ok(settings.iter().find(|s| s.setting_code == setting_code).cloned())
    }

    async fn find_value_by_key(&self, set_key: &str) -> Result<Option<String>, DomainError> {
        let settings = self.settings.read().await;
        Ok(settings
            .iter()
            .find(|s| s.set_key == set_key && s.is_active)
            .map(|s| s.content_value.clone()))
    }

    async fn insert(&self, mut setting: Setting) -> Result<Setting, DomainError> {
        setting.id = Some(self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
        self.settings.write().await.push(setting.clone());
        Ok(setting)
    }

    async fn update(&self, setting_code: &str, update: &SettingUpdate) -> Result<bool, DomainError> {
        let mut settings = self.settings.write().await;
        match settings.iter_mut().find(|s| s.setting_code == setting_code) {
            Some(setting) => {
                setting.set_key = update.set_key.clone();
                setting.set_label = update.set_label.clone();
                setting.set_order = update.set_order;
                setting.content_value = update.content_value.clone();
                setting.is_active = update.is_active;
                setting.updated_at = Some(Utc::now());
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
