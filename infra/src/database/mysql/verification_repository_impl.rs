//! MySQL implementation of the VerificationRepository trait.
//!
//! Redemption runs in a single transaction: the conditional
//! `is_used = FALSE -> TRUE` flip and the account mutation commit together,
//! so concurrent redemptions of one token see exactly one winner.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::mysql::MySqlRow;
use sqlx::{MySql, MySqlPool, Row, Transaction};

use ve_core::domain::entities::{Account, AccountUpdate, VerificationPurpose, VerificationToken};
use ve_core::errors::{DomainError, VerificationError};
use ve_core::repositories::VerificationRepository;

use super::account_repository_impl::{MySqlAccountRepository, ACCOUNT_COLUMNS};
use super::{column_error, is_unique_violation, storage_error};

/// MySQL implementation of VerificationRepository
pub struct MySqlVerificationRepository {
    pool: MySqlPool,
}

impl MySqlVerificationRepository {
    /// Create a new MySQL verification repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_token(row: &MySqlRow) -> Result<VerificationToken, DomainError> {
        let purpose: String = row
            .try_get("verification_type")
            .map_err(column_error("verification_type"))?;
        let actor_type: String = row.try_get("actor_type").map_err(column_error("actor_type"))?;

        Ok(VerificationToken {
            id: Some(row.try_get("id").map_err(column_error("id"))?),
            token: row.try_get("token").map_err(column_error("token"))?,
            email: row.try_get("email").map_err(column_error("email"))?,
            purpose: purpose.parse().map_err(|_| DomainError::Internal {
                message: format!("Unknown verification type: {}", purpose),
            })?,
            actor_type: actor_type
                .parse()
                .map_err(|message: String| DomainError::Internal { message })?,
            is_used: row.try_get("is_used").map_err(column_error("is_used"))?,
            expires_at: row
                .try_get::<DateTime<Utc>, _>("expired_date")
                .map_err(column_error("expired_date"))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_date")
                .map_err(column_error("created_date"))?,
        })
    }

    /// Apply the purpose's account patch inside the redemption transaction
    async fn apply_account_update(
        tx: &mut Transaction<'_, MySql>,
        user_identifier: &str,
        update: &AccountUpdate,
    ) -> Result<(), DomainError> {
        if update.is_empty() {
            return Ok(());
        }

        let query = r#"
            UPDATE users
            SET email = COALESCE(?, email),
                is_verify = COALESCE(?, is_verify),
                updated_date = ?
            WHERE user_identifier = ? AND deleted_date IS NULL
        "#;

        let result = sqlx::query(query)
            .bind(&update.email)
            .bind(update.is_verified)
            .bind(Utc::now())
            .bind(user_identifier)
            .execute(&mut **tx)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    return DomainError::Conflict {
                        message: "Email is already registered".to_string(),
                    };
                }
                storage_error("update account on redemption")(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("user"));
        }
        Ok(())
    }
}

#[async_trait]
impl VerificationRepository for MySqlVerificationRepository {
    async fn find_by_token_and_purpose(
        &self,
        token: &str,
        purpose: VerificationPurpose,
    ) -> Result<Option<VerificationToken>, DomainError> {
        let query = r#"
            SELECT id, token, email, verification_type, actor_type, is_used, expired_date, created_date
            FROM verifications
            WHERE token = ? AND verification_type = ?
            LIMIT 1
        "#;

        let row = sqlx::query(query)
            .bind(token)
            .bind(purpose.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_error("find verification"))?;

        row.as_ref().map(Self::row_to_token).transpose()
    }

    async fn insert(&self, mut token: VerificationToken) -> Result<VerificationToken, DomainError> {
        let query = r#"
            INSERT INTO verifications (
                token, email, verification_type, actor_type, is_used, expired_date, created_date
            ) VALUES (?, ?, ?, ?, ?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(&token.token)
            .bind(&token.email)
            .bind(token.purpose.as_str())
            .bind(token.actor_type.as_str())
            .bind(token.is_used)
            .bind(token.expires_at)
            .bind(token.created_at)
            .execute(&self.pool)
            .await
            .map_err(storage_error("insert verification"))?;

        token.id = Some(result.last_insert_id() as i64);
        Ok(token)
    }

    async fn consume(
        &self,
        token: &str,
        purpose: VerificationPurpose,
        user_identifier: &str,
        update: &AccountUpdate,
    ) -> Result<Account, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(storage_error("begin redemption transaction"))?;

        let marked = sqlx::query(
            r#"
            UPDATE verifications
            SET is_used = TRUE
            WHERE token = ? AND verification_type = ? AND is_used = FALSE
            "#,
        )
        .bind(token)
        .bind(purpose.as_str())
        .execute(&mut *tx)
        .await
        .map_err(storage_error("mark verification used"))?;

        if marked.rows_affected() == 0 {
            tx.rollback()
                .await
                .map_err(storage_error("roll back redemption"))?;
            return Err(VerificationError::TokenAlreadyUsed.into());
        }

        // Dropping `tx` on an error path rolls the token flip back
        Self::apply_account_update(&mut tx, user_identifier, update).await?;

        let select = format!(
            "SELECT {} FROM users WHERE user_identifier = ? AND deleted_date IS NULL LIMIT 1",
            ACCOUNT_COLUMNS
        );
        let row = sqlx::query(&select)
            .bind(user_identifier)
            .fetch_optional(&mut *tx)
            .await
            .map_err(storage_error("reload account"))?
            .ok_or_else(|| DomainError::not_found("user"))?;
        let account = MySqlAccountRepository::row_to_account(&row)?;

        tx.commit()
            .await
            .map_err(storage_error("commit redemption"))?;

        Ok(account)
    }
}
