//! MySQL implementation of the AccountRepository trait.
//!
//! Accounts live in the `users` table. Soft-deleted rows keep their data but
//! are filtered out of every lookup by `deleted_date IS NULL`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::mysql::MySqlRow;
use sqlx::{MySqlPool, Row};

use ve_core::domain::entities::{Account, ProfileUpdate};
use ve_core::errors::DomainError;
use ve_core::repositories::AccountRepository;

use super::{column_error, is_unique_violation, storage_error};

/// Column list shared by every account SELECT
pub(crate) const ACCOUNT_COLUMNS: &str = r#"
    id, user_identifier, first_name, last_name, email, avatar_url, description,
    password, is_verify, created_date, updated_date, deleted_date
"#;

/// MySQL implementation of AccountRepository
pub struct MySqlAccountRepository {
    pool: MySqlPool,
}

impl MySqlAccountRepository {
    /// Create a new MySQL account repository
    ///
    /// # Arguments
    /// * `pool` - MySQL connection pool from SQLx
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a `users` row to an Account entity
    pub(crate) fn row_to_account(row: &MySqlRow) -> Result<Account, DomainError> {
        Ok(Account {
            id: Some(row.try_get("id").map_err(column_error("id"))?),
            user_identifier: row
                .try_get("user_identifier")
                .map_err(column_error("user_identifier"))?,
            first_name: row.try_get("first_name").map_err(column_error("first_name"))?,
            last_name: row.try_get("last_name").map_err(column_error("last_name"))?,
            email: row.try_get("email").map_err(column_error("email"))?,
            avatar_url: row.try_get("avatar_url").map_err(column_error("avatar_url"))?,
            description: row.try_get("description").map_err(column_error("description"))?,
            password_hash: row.try_get("password").map_err(column_error("password"))?,
            is_verified: row.try_get("is_verify").map_err(column_error("is_verify"))?,
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

    async fn find_one(&self, column: &'static str, value: &str) -> Result<Option<Account>, DomainError> {
        let query = format!(
            "SELECT {} FROM users WHERE {} = ? AND deleted_date IS NULL LIMIT 1",
            ACCOUNT_COLUMNS, column
        );

        let row = sqlx::query(&query)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(operation = "account.find", column, error = %e, "Account lookup failed");
                storage_error("find account")(e)
            })?;

        row.as_ref().map(Self::row_to_account).transpose()
    }
}

#[async_trait]
impl AccountRepository for MySqlAccountRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError> {
        self.find_one("email", email).await
    }

    async fn find_by_identifier(&self, user_identifier: &str) -> Result<Option<Account>, DomainError> {
        self.find_one("user_identifier", user_identifier).await
    }

    async fn create(&self, mut account: Account) -> Result<Account, DomainError> {
        let query = r#"
            INSERT INTO users (
                user_identifier, first_name, last_name, email, avatar_url, description,
                password, is_verify, created_date
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(&account.user_identifier)
            .bind(&account.first_name)
            .bind(&account.last_name)
            .bind(&account.email)
            .bind(&account.avatar_url)
            .bind(&account.description)
            .bind(&account.password_hash)
            .bind(account.is_verified)
            .bind(account.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    return DomainError::Conflict {
                        message: "Email is already registered".to_string(),
                    };
                }
                tracing::error!(operation = "account.create", error = %e, "Failed to insert account");
                storage_error("create account")(e)
            })?;

        account.id = Some(result.last_insert_id() as i64);
        Ok(account)
    }

    async fn update_profile(&self, user_identifier: &str, profile: &ProfileUpdate) -> Result<bool, DomainError> {
        let query = r#"
            UPDATE users
            SET first_name = ?, last_name = ?, description = ?, avatar_url = ?, updated_date = ?
            WHERE user_identifier = ? AND deleted_date IS NULL
        "#;

        let result = sqlx::query(query)
            .bind(&profile.first_name)
            .bind(&profile.last_name)
            .bind(&profile.description)
            .bind(&profile.avatar_url)
            .bind(Utc::now())
            .bind(user_identifier)
            .execute(&self.pool)
            .await
            .map_err(storage_error("update profile"))?;

        Ok(result.rows_affected() > 0)
    }

    async fn update_email(&self, user_identifier: &str, email: &str) -> Result<bool, DomainError> {
        let query = r#"
            UPDATE users
            SET email = ?, updated_date = ?
            WHERE user_identifier = ? AND deleted_date IS NULL
        "#;

        let result = sqlx::query(query)
            .bind(email)
            .bind(Utc::now())
            .bind(user_identifier)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    return DomainError::Conflict {
                        message: "Email is already registered".to_string(),
                    };
                }
                storage_error("update email")(e)
            })?;

        Ok(result.rows_affected() > 0)
    }

    async fn update_password(&self, user_identifier: &str, password_hash: &str) -> Result<bool, DomainError> {
        let query = r#"
            UPDATE users
            SET password = ?, updated_date = ?
            WHERE user_identifier = ? AND deleted_date IS NULL
        "#;

        let result = sqlx::query(query)
            .bind(password_hash)
            .bind(Utc::now())
            .bind(user_identifier)
            .execute(&self.pool)
            .await
            .map_err(storage_error("update password"))?;

        Ok(result.rows_affected() > 0)
    }
}
