//! MySQL implementation of PostRepository

use async_trait::async_trait;
use chrono::Utc;
use sqlx::MySqlPool;
use tracing::instrument;

use forum_core::entities::Post;
use forum_core::traits::{PostPage, PostRepository, RepoResult};

use crate::models::PostModel;

use super::error::{map_db_error, post_not_found};

/// MySQL implementation of PostRepository
#[derive(Clone)]
pub struct MySqlPostRepository {
    pool: MySqlPool,
}

impl MySqlPostRepository {
    /// Create a new MySqlPostRepository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    async fn fetch_by_id(&self, id: i64) -> RepoResult<Option<PostModel>> {
        sqlx::query_as::<_, PostModel>(
            r"
            SELECT id, user_id, title, content, num_likes, created_at, updated_at
            FROM posts
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
impl PostRepository for MySqlPostRepository {
    #[instrument(skip(self, title, content))]
    async fn create(&self, user_id: i64, title: &str, content: &str) -> RepoResult<Post> {
        let now = Utc::now();

        let result = sqlx::query(
            r"
            INSERT INTO posts (user_id, title, content, num_likes, created_at, updated_at)
            VALUES (?, ?, ?, 0, ?, ?)
            ",
        )
        .bind(user_id)
        .bind(title)
        .bind(content)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        let id = result.last_insert_id() as i64;

        let model = self
            .fetch_by_id(id)
            .await?
            .ok_or_else(|| post_not_found(id))?;

        Ok(Post::from(model))
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Post>> {
        let result = self.fetch_by_id(id).await?;
        Ok(result.map(Post::from))
    }

    #[instrument(skip(self))]
    async fn list(&self, page: &PostPage) -> RepoResult<Vec<Post>> {
        let results = sqlx::query_as::<_, PostModel>(
            r"
            SELECT id, user_id, title, content, num_likes, created_at, updated_at
            FROM posts
            ORDER BY created_at DESC, id DESC
            LIMIT ? OFFSET ?
            ",
        )
        .bind(page.limit)
        .bind(page.offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Post::from).collect())
    }

    #[instrument(skip(self))]
    async fn count(&self) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM posts
            ",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self, title, content))]
    async fn update(&self, id: i64, title: &str, content: &str) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE posts
            SET title = ?, content = ?, updated_at = NOW()
            WHERE id = ?
            ",
        )
        .bind(title)
        .bind(content)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        // MySQL reports zero affected rows for a value-identical update,
        // so only a missing row is an error
        if result.rows_affected() == 0 && self.fetch_by_id(id).await?.is_none() {
            return Err(post_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        // Comments and likes are removed by ON DELETE CASCADE
        let result = sqlx::query(
            r"
            DELETE FROM posts WHERE id = ?
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(post_not_found(id));
        }

        Ok(())
    }
}
