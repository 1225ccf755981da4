//! MySQL implementation of CommentRepository

use async_trait::async_trait;
use chrono::Utc;
use sqlx::MySqlPool;
use tracing::instrument;

use forum_core::entities::Comment;
use forum_core::traits::{CommentRepository, RepoResult};

use crate::models::CommentModel;

use super::error::{comment_not_found, map_db_error};

/// MySQL implementation of CommentRepository
#[derive(Clone)]
pub struct MySqlCommentRepository {
    pool: MySqlPool,
}

impl MySqlCommentRepository {
    /// Create a new MySqlCommentRepository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    async fn fetch_by_id(&self, id: i64) -> RepoResult<Option<CommentModel>> {
        sqlx::query_as::<_, CommentModel>(
            r"
            SELECT id, post_id, user_id, content, created_at
            FROM comments
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
impl CommentRepository for MySqlCommentRepository {
    #[instrument(skip(self, content))]
    async fn create(&self, post_id: i64, user_id: i64, content: &str) -> RepoResult<Comment> {
        let result = sqlx::query(
            r"
            INSERT INTO comments (post_id, user_id, content, created_at)
            VALUES (?, ?, ?, ?)
            ",
        )
        .bind(post_id)
        .bind(user_id)
        .bind(content)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        let id = result.last_insert_id() as i64;

        let model = self
            .fetch_by_id(id)
            .await?
            .ok_or_else(|| comment_not_found(id))?;

        Ok(Comment::from(model))
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Comment>> {
        let result = self.fetch_by_id(id).await?;
        Ok(result.map(Comment::from))
    }

    #[instrument(skip(self))]
    async fn list_by_post(&self, post_id: i64) -> RepoResult<Vec<Comment>> {
        let results = sqlx::query_as::<_, CommentModel>(
            r"
            SELECT id, post_id, user_id, content, created_at
            FROM comments
            WHERE post_id = ?
            ORDER BY created_at ASC, id ASC
            ",
        )
        .bind(post_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Comment::from).collect())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM comments WHERE id = ?
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(comment_not_found(id));
        }

        Ok(())
    }
}
