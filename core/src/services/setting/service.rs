use std::sync::Arc;

use crate::domain::entities::{NewSetting, Setting, SettingUpdate};
use crate::domain::value_objects::SettingQuery;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{SettingPage, SettingRepository};

use super::types::SettingInput;

/// Key/value settings service
pub struct SettingService<S: SettingRepository> {
    repository: Arc<S>,
}

impl<S: SettingRepository> SettingService<S> {
    pub fn new(repository: Arc<S>) -> Self {
        Self { repository }
    }

    /// Filtered page of settings plus the total match count
    pub async fn list(&self, query: &SettingQuery) -> DomainResult<SettingPage> {
        self.repository.list(query).await.map_err(|e| {
            tracing::error!(operation = "setting.list", error = %e, "Failed to list settings");
            DomainError::internal("Error getting list setting")
        })
    }

    pub async fn get_by_code(&self, setting_code: &str) -> DomainResult<Setting> {
        self.repository
            .find_by_code(setting_code)
            .await
            .map_err(|e| {
                tracing::error!(operation = "setting.get_by_code", error = %e, "Failed to load setting");
                DomainError::internal("Error getting setting by code")
            })?
            .ok_or_else(|| DomainError::not_found("setting"))
    }

    /// Value of an active setting
    pub async fn get_value_by_key(&self, set_key: &str) -> DomainResult<String> {
        self.repository
            .find_value_by_key(set_key)
            .await
            .map_err(|e| {
                tracing::error!(operation = "setting.get_value_by_key", error = %e, "Failed to load setting");
                DomainError::internal("Error getting setting by key")
            })?
            .ok_or_else(|| DomainError::not_found("setting"))
    }

    /// Validate the content type and store a new setting
    pub async fn add(&self, input: SettingInput) -> DomainResult<Setting> {
        let new_setting = NewSetting::try_from(input)?;
        self.repository
            .insert(Setting::new(new_setting))
            .await
            .map_err(|e| {
                tracing::error!(operation = "setting.add", error = %e, "Failed to add setting");
                DomainError::internal("Error adding setting")
            })
    }

    pub async fn update(&self, setting_code: &str, update: SettingUpdate) -> DomainResult<Setting> {
        let updated = self
            .repository
            .update(setting_code, &update)
            .await
            .map_err(|e| {
                tracing::error!(operation = "setting.update", error = %e, "Failed to update setting");
                DomainError::internal("Error updating setting")
            })?;
        if !updated {
            return Err(DomainError::not_found("setting"));
        }
        self.get_by_code(setting_code).await
    }
}
