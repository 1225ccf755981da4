//! MySQL implementation of VerificationCodeRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::MySqlPool;
use tracing::instrument;

use forum_core::entities::VerificationCode;
use forum_core::traits::{RepoResult, VerificationCodeRepository};

use crate::models::VerificationCodeModel;

use super::error::map_db_error;

/// MySQL implementation of VerificationCodeRepository
#[derive(Clone)]
pub struct MySqlVerificationCodeRepository {
    pool: MySqlPool,
}

impl MySqlVerificationCodeRepository {
    /// Create a new MySqlVerificationCodeRepository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    async fn fetch_match(&self, email: &str, code: &str) -> RepoResult<Option<VerificationCode>> {
        let result = sqlx::query_as::<_, VerificationCodeModel>(
            r"
            SELECT id, email, code, created_at, expires_at
            FROM verification_codes
            WHERE email = ? AND code = ?
            ",
        )
        .bind(email)
        .bind(code)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(VerificationCode::from))
    }
}

#[async_trait]
impl VerificationCodeRepository for MySqlVerificationCodeRepository {
    #[instrument(skip(self, code))]
    async fn store(&self, email: &str, code: &str, expires_at: DateTime<Utc>) -> RepoResult<()> {
        // Delete-then-insert keeps at most one live code per email. The two
        // statements are not transactional; a crash in between only loses
        // the old code, which the user could no longer use anyway.
        sqlx::query(
            r"
            DELETE FROM verification_codes WHERE email = ?
            ",
        )
        .bind(email)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        sqlx::query(
            r"
            INSERT INTO verification_codes (email, code, created_at, expires_at)
            VALUES (?, ?, ?, ?)
            ",
        )
        .bind(email)
        .bind(code)
        .bind(Utc::now())
        .bind(expires_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, code))]
    async fn check(&self, email: &str, code: &str) -> RepoResult<bool> {
        let result = self.fetch_match(email, code).await?;

        Ok(result.is_some_and(|c| c.is_valid(Utc::now())))
    }

    #[instrument(skip(self, code))]
    async fn consume(&self, email: &str, code: &str) -> RepoResult<bool> {
        let Some(found) = self.fetch_match(email, code).await? else {
            return Ok(false);
        };

        // An expired row stays put; only the next store for this email
        // clears it
        if !found.is_valid(Utc::now()) {
            return Ok(false);
        }

        sqlx::query(
            r"
            DELETE FROM verification_codes WHERE id = ?
            ",
        )
        .bind(found.id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MySqlVerificationCodeRepository>();
    }
}
