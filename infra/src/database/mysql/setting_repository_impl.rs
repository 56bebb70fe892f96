//! MySQL implementation of the SettingRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::mysql::MySqlRow;
use sqlx::{MySql, MySqlPool, QueryBuilder, Row};

use ve_core::domain::entities::{Setting, SettingUpdate};
use ve_core::domain::value_objects::SettingQuery;
use ve_core::errors::DomainError;
use ve_core::repositories::{SettingPage, SettingRepository};

use super::{column_error, storage_error};

const SETTING_COLUMNS: &str = "id, setting_code, set_group, set_key, set_label, set_order, \
     content_type, content_value, is_active, created_date, updated_date";

/// MySQL implementation of SettingRepository
pub struct MySqlSettingRepository {
    pool: MySqlPool,
}

impl MySqlSettingRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_setting(row: &MySqlRow) -> Result<Setting, DomainError> {
        let content_type: String = row.try_get("content_type").map_err(column_error("content_type"))?;

        Ok(Setting {
            id: Some(row.try_get("id").map_err(column_error("id"))?),
            setting_code: row.try_get("setting_code").map_err(column_error("setting_code"))?,
            set_group: row.try_get("set_group").map_err(column_error("set_group"))?,
            set_key: row.try_get("set_key").map_err(column_error("set_key"))?,
            set_label: row.try_get("set_label").map_err(column_error("set_label"))?,
            set_order: row.try_get("set_order").map_err(column_error("set_order"))?,
            content_type: content_type.parse().map_err(|_| DomainError::Internal {
                message: format!("Unknown content type: {}", content_type),
            })?,
            content_value: row.try_get("content_value").map_err(column_error("content_value"))?,
            is_active: row.try_get("is_active").map_err(column_error("is_active"))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_date")
                .map_err(column_error("created_date"))?,
            updated_at: row
                .try_get::<Option<DateTime<Utc>>, _>("updated_date")
                .map_err(column_error("updated_date"))?,
        })
    }

    /// Append the list filters shared by the count and page queries
    fn push_filters<'a>(builder: &mut QueryBuilder<'a, MySql>, query: &'a SettingQuery) {
        builder.push(" WHERE 1 = 1");
        if let Some(keyword) = query.keyword() {
            let pattern = format!("%{}%", keyword);
            builder
                .push(" AND (set_label LIKE ")
                .push_bind(pattern.clone())
                .push(" OR content_value LIKE ")
                .push_bind(pattern)
                .push(")");
        }
        if let Some(is_active) = query.is_active {
            builder.push(" AND is_active = ").push_bind(is_active);
        }
        if let Some(group) = &query.set_group {
            builder.push(" AND set_group = ").push_bind(group.as_str());
        }
    }
}

#[async_trait]
impl SettingRepository for MySqlSettingRepository {
    async fn list(&self, query: &SettingQuery) -> Result<SettingPage, DomainError> {
        let mut count = QueryBuilder::<MySql>::new("SELECT COUNT(*) AS total FROM settings");
        Self::push_filters(&mut count, query);
        let total: i64 = count
            .build()
            .fetch_one(&self.pool)
            .await
            .map_err(storage_error("count settings"))?
            .try_get("total")
            .map_err(column_error("total"))?;
        let total = total.max(0) as u64;

        let pagination = query.pagination.clamp_to_total(total);

        let mut page = QueryBuilder::<MySql>::new(format!("SELECT {} FROM settings", SETTING_COLUMNS));
        Self::push_filters(&mut page, query);
        // Column comes from a fixed whitelist, direction from an enum
        page.push(format!(" ORDER BY {} {}", query.order_column(), query.sort))
            .push(" LIMIT ")
            .push_bind(pagination.limit_i64())
            .push(" OFFSET ")
            .push_bind(pagination.offset_i64());

        let rows = page
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(storage_error("list settings"))?;
        let items = rows.iter().map(Self::row_to_setting).collect::<Result<Vec<_>, _>>()?;

        Ok(SettingPage {
            items,
            total,
            pagination,
        })
    }

    async fn find_by_code(&self, setting_code: &str) -> Result<Option<Setting>, DomainError> {
        let query = format!("SELECT {} FROM settings WHERE setting_code = ? LIMIT 1", SETTING_COLUMNS);

        let row = sqlx::query(&query)
            .bind(setting_code)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_error("find setting"))?;

        row.as_ref().map(Self::row_to_setting).transpose()
    }

    async fn find_value_by_key(&self, set_key: &str) -> Result<Option<String>, DomainError> {
        let query = r#"
            SELECT content_value FROM settings
            WHERE set_key = ? AND is_active = TRUE
            ORDER BY set_order ASC
            LIMIT 1
        "#;

        let row = sqlx::query(query)
            .bind(set_key)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_error("find setting value"))?;

        row.map(|r| r.try_get("content_value").map_err(column_error("content_value")))
            .transpose()
    }

    async fn insert(&self, mut setting: Setting) -> Result<Setting, DomainError> {
        let query = r#"
            INSERT INTO settings (
                setting_code, set_group, set_key, set_label, set_order,
                content_type, content_value, is_active, created_date
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(&setting.setting_code)
            .bind(&setting.set_group)
            .bind(&setting.set_key)
            .bind(&setting.set_label)
            .bind(setting.set_order)
            .bind(setting.content_type.as_str())
            .bind(&setting.content_value)
            .bind(setting.is_active)
            .bind(setting.created_at)
            .execute(&self.pool)
            .await
            .map_err(storage_error("insert setting"))?;

        setting.id = Some(result.last_insert_id() as i64);
        Ok(setting)
    }

    async fn update(&self, setting_code: &str, update: &SettingUpdate) -> Result<bool, DomainError> {
        let query = r#"
            UPDATE settings
            SET set_key = ?, set_label = ?, set_order = ?, content_value = ?, is_active = ?, updated_date = ?
            WHERE setting_code = ?
        "#;

        let result = sqlx::query(query)
            .bind(&update.set_key)
            .bind(&update.set_label)
            .bind(update.set_order)
            .bind(&update.content_value)
            .bind(update.is_active)
            .bind(Utc::now())
            .bind(setting_code)
            .execute(&self.pool)
            .await
            .map_err(storage_error("update setting"))?;

        Ok(result.rows_affected() > 0)
    }
}
