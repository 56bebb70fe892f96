//! Setting repository trait.

use async_trait::async_trait;
use ve_shared::types::Pagination;

use crate::domain::entities::{Setting, SettingUpdate};
use crate::domain::value_objects::SettingQuery;
use crate::errors::DomainError;

/// One page of settings together with the paging actually applied
#[derive(Debug, Clone)]
pub struct SettingPage {
    pub items: Vec<Setting>,
    pub total: u64,
    pub pagination: Pagination,
}

/// Repository trait for application settings
#[async_trait]
pub trait SettingRepository: Send + Sync {
    /// Filtered, ordered page of settings
    ///
    /// The requested page is clamped against the filtered total before the
    /// offset is computed, so a page past the end returns the last page.
    async fn list(&self, query: &SettingQuery) -> Result<SettingPage, DomainError>;

    async fn find_by_code(&self, setting_code: &str) -> Result<Option<Setting>, DomainError>;

    /// Raw value of the active setting with `set_key`
    async fn find_value_by_key(&self, set_key: &str) -> Result<Option<String>, DomainError>;

    async fn insert(&self, setting: Setting) -> Result<Setting, DomainError>;

    /// Apply `update`; returns `false` if no setting has `setting_code`
    async fn update(&self, setting_code: &str, update: &SettingUpdate) -> Result<bool, DomainError>;
}
