//! MySQL implementation of UserRepository

use async_trait::async_trait;
use chrono::Utc;
use sqlx::MySqlPool;
use tracing::instrument;

use forum_core::entities::User;
use forum_core::error::DomainError;
use forum_core::traits::{RepoResult, UserRepository};

use crate::models::UserModel;

use super::error::{map_db_error, map_unique_violation, user_not_found};

/// MySQL implementation of UserRepository
#[derive(Clone)]
pub struct MySqlUserRepository {
    pool: MySqlPool,
}

impl MySqlUserRepository {
    /// Create a new MySqlUserRepository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    async fn fetch_by_id(&self, id: i64) -> RepoResult<Option<UserModel>> {
        sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, email, password_hash, email_verified, created_at, updated_at
            FROM users
            WHERE id = ?
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<User>> {
        let result = self.fetch_by_id(id).await?;
        Ok(result.map(User::from))
    }

    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, email, password_hash, email_verified, created_at, updated_at
            FROM users
            WHERE email = ?
            ",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self))]
    async fn email_exists(&self, email: &str) -> RepoResult<bool> {
        let count = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM users WHERE email = ?
            ",
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count > 0)
    }

    #[instrument(skip(self, password_hash))]
    async fn create(&self, email: &str, password_hash: &str) -> RepoResult<User> {
        let now = Utc::now();

        let result = sqlx::query(
            r"
            INSERT INTO users (email, password_hash, email_verified, created_at, updated_at)
            VALUES (?, ?, FALSE, ?, ?)
            ",
        )
        .bind(email)
        .bind(password_hash)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::EmailAlreadyExists))?;

        let id = result.last_insert_id() as i64;

        let model = self
            .fetch_by_id(id)
            .await?
            .ok_or_else(|| user_not_found(id))?;

        // The initial hash also lands in history, so reuse checks can see
        // it. Best effort, same as on password change.
        let history = sqlx::query(
            r"
            INSERT INTO password_history (user_id, password_hash, created_at)
            VALUES (?, ?, ?)
            ",
        )
        .bind(id)
        .bind(password_hash)
        .bind(now)
        .execute(&self.pool)
        .await;

        if let Err(e) = history {
            tracing::warn!(user_id = id, error = %e, "failed to record password history");
        }

        Ok(User::from(model))
    }

    #[instrument(skip(self))]
    async fn get_password_hash(&self, email: &str) -> RepoResult<Option<String>> {
        let result = sqlx::query_scalar::<_, String>(
            r"
            SELECT password_hash FROM users WHERE email = ?
            ",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn mark_verified(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE users
            SET email_verified = TRUE, updated_at = NOW()
            WHERE id = ?
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        // MySQL reports zero affected rows for a value-identical update,
        // so only a missing row is an error
        if result.rows_affected() == 0 && self.fetch_by_id(id).await?.is_none() {
            return Err(user_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self, password_hash))]
    async fn update_password(&self, id: i64, password_hash: &str) -> RepoResult<()> {
        let previous_hash = sqlx::query_scalar::<_, String>(
            r"
            SELECT password_hash FROM users WHERE id = ?
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?
        .ok_or_else(|| user_not_found(id))?;

        // The select above proved the row exists; zero affected rows here
        // would only mean a value-identical hash
        sqlx::query(
            r"
            UPDATE users
            SET password_hash = ?, updated_at = NOW()
            WHERE id = ?
            ",
        )
        .bind(password_hash)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        // History is an append-only audit trail; a failed write must not
        // roll back the password change itself.
        let history = sqlx::query(
            r"
            INSERT INTO password_history (user_id, password_hash, created_at)
            VALUES (?, ?, ?)
            ",
        )
        .bind(id)
        .bind(previous_hash)
        .bind(Utc::now())
        .execute(&self.pool)
        .await;

        if let Err(e) = history {
            tracing::warn!(user_id = id, error = %e, "failed to record password history");
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn recent_password_hashes(&self, user_id: i64, limit: i64) -> RepoResult<Vec<String>> {
        let results = sqlx::query_scalar::<_, String>(
            r"
            SELECT password_hash
            FROM password_history
            WHERE user_id = ?
            ORDER BY created_at DESC, id DESC
            LIMIT ?
            ",
        )
        .bind(user_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results)
    }
}
