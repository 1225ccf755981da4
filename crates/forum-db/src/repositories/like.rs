//! MySQL implementation of LikeRepository

use async_trait::async_trait;
use chrono::Utc;
use sqlx::MySqlPool;
use tracing::instrument;

use forum_core::traits::{LikeRepository, RepoResult};

use super::error::{map_db_error, post_not_found};

/// MySQL implementation of LikeRepository
#[derive(Clone)]
pub struct MySqlLikeRepository {
    pool: MySqlPool,
}

impl MySqlLikeRepository {
    /// Create a new MySqlLikeRepository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LikeRepository for MySqlLikeRepository {
    #[instrument(skip(self))]
    async fn insert(&self, user_id: i64, post_id: i64) -> RepoResult<bool> {
        // INSERT IGNORE reports zero affected rows when the (user, post)
        // pair already exists, which the service turns into a conflict
        let result = sqlx::query(
            r"
            INSERT IGNORE INTO likes (user_id, post_id, created_at)
            VALUES (?, ?, ?)
            ",
        )
        .bind(user_id)
        .bind(post_id)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn remove(&self, user_id: i64, post_id: i64) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            DELETE FROM likes WHERE user_id = ? AND post_id = ?
            ",
        )
        .bind(user_id)
        .bind(post_id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn increment_count(&self, post_id: i64) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE posts SET num_likes = num_likes + 1 WHERE id = ?
            ",
        )
        .bind(post_id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(post_not_found(post_id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn decrement_count(&self, post_id: i64) -> RepoResult<()> {
        // Floored at zero so repeated unlikes can never drive it negative.
        // No affected-rows check: MySQL reports zero when the value is
        // already 0 and the update is a no-op.
        sqlx::query(
            r"
            UPDATE posts SET num_likes = GREATEST(num_likes - 1, 0) WHERE id = ?
            ",
        )
        .bind(post_id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn count(&self, post_id: i64) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM likes WHERE post_id = ?
            ",
        )
        .bind(post_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }
}
