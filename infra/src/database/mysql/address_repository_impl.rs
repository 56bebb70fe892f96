//! MySQL implementation of the AddressRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::mysql::MySqlRow;
use sqlx::{MySqlPool, Row};

use ve_core::domain::entities::UserAddress;
use ve_core::errors::DomainError;
use ve_core::repositories::AddressRepository;

use super::{column_error, storage_error};

const ADDRESS_COLUMNS: &str =
    "id, user_id, address_identifier, title, full_address, created_date, updated_date, deleted_date";

/// MySQL implementation of AddressRepository backed by `user_addresses`
pub struct MySqlAddressRepository {
    pool: MySqlPool,
}

impl MySqlAddressRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_address(row: &MySqlRow) -> Result<UserAddress, DomainError> {
        Ok(UserAddress {
            id: Some(row.try_get("id").map_err(column_error("id"))?),
            user_id: row.try_get("user_id").map_err(column_error("user_id"))?,
            address_identifier: row
                .try_get("address_identifier")
                .map_err(column_error("address_identifier"))?,
            title: row.try_get("title").map_err(column_error("title"))?,
            full_address: row.try_get("full_address").map_err(column_error("full_address"))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_date")
                .map_err(column_error("created_date"))?,
            updated_at: row
                .try_get::<Option<DateTime<Utc>>, _>("updated_date")
                .map_err(column_error("updated_date"))?,
            deleted_at: row
                .try_get::<Option<DateTime<Utc>>, _>("deleted_date")
                .map_err(column_error("deleted_date"))?,
        })
    }
}

#[async_trait]
impl AddressRepository for MySqlAddressRepository {
    async fn list_by_user(&self, user_id: i64) -> Result<Vec<UserAddress>, DomainError> {
        let query = format!(
            "SELECT {} FROM user_addresses WHERE user_id = ? AND deleted_date IS NULL ORDER BY id ASC",
            ADDRESS_COLUMNS
        );

        let rows = sqlx::query(&query)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(storage_error("list addresses"))?;

        rows.iter().map(Self::row_to_address).collect()
    }

    async fn find_by_identifier(
        &self,
        user_id: i64,
        address_identifier: &str,
    ) -> Result<Option<UserAddress>, DomainError> {
        let query = format!(
            "SELECT {} FROM user_addresses \
             WHERE user_id = ? AND address_identifier = ? AND deleted_date IS NULL LIMIT 1",
            ADDRESS_COLUMNS
        );

        let row = sqlx::query(&query)
            .bind(user_id)
            .bind(address_identifier)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_error("find address"))?;

        row.as_ref().map(Self::row_to_address).transpose()
    }

    async fn insert(&self, mut address: UserAddress) -> Result<UserAddress, DomainError> {
        let query = r#"
            INSERT INTO user_addresses (user_id, address_identifier, title, full_address, created_date)
            VALUES (?, ?, ?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(address.user_id)
            .bind(&address.address_identifier)
            .bind(&address.title)
            .bind(&address.full_address)
            .bind(address.created_at)
            .execute(&self.pool)
            .await
            .map_err(storage_error("insert address"))?;

        address.id = Some(result.last_insert_id() as i64);
        Ok(address)
    }

    async fn update(
        &self,
        user_id: i64,
        address_identifier: &str,
        title: Option<&str>,
        full_address: &str,
    ) -> Result<bool, DomainError> {
        let query = r#"
            UPDATE user_addresses
            SET title = ?, full_address = ?, updated_date = ?
            WHERE user_id = ? AND address_identifier = ? AND deleted_date IS NULL
        "#;

        let result = sqlx::query(query)
            .bind(title)
            .bind(full_address)
            .bind(Utc::now())
            .bind(user_id)
            .bind(address_identifier)
            .execute(&self.pool)
            .await
            .map_err(storage_error("update address"))?;

        Ok(result.rows_affected() > 0)
    }

    async fn soft_delete(&self, user_id: i64, address_identifier: &str) -> Result<bool, DomainError> {
        let query = r#"
            UPDATE user_addresses
            SET deleted_date = ?
            WHERE user_id = ? AND address_identifier = ? AND deleted_date IS NULL
        "#;

        let result = sqlx::query(query)
            .bind(Utc::now())
            .bind(user_id)
            .bind(address_identifier)
            .execute(&self.pool)
            .await
            .map_err(storage_error("delete address"))?;

        Ok(result.rows_affected() > 0)
    }
}
