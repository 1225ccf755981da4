//! Post service
//!
//! Handles post creation, listing, updates, and deletion with ownership checks.

use forum_core::entities::Post;
use forum_core::traits::PostPage;
use forum_core::DomainError;
use tracing::{info, instrument};

use crate::dto::{CreatePostRequest, PostListResponse, PostResponse, UpdatePostRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Default page size for post listings
pub const DEFAULT_PAGE_LIMIT: i64 = 10;
/// Maximum page size for post listings
pub const MAX_PAGE_LIMIT: i64 = 50;

/// Post service
pub struct PostService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PostService<'a> {
    /// Create a new PostService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a new post
    #[instrument(skip(self, request))]
    pub async fn create(
        &self,
        user_id: i64,
        request: CreatePostRequest,
    ) -> ServiceResult<PostResponse> {
        Post::validate(&request.title, &request.content)?;

        let post = self
            .ctx
            .post_repo()
            .create(user_id, &request.title, &request.content)
            .await?;

        info!(post_id = post.id, user_id, "Post created");

        Ok(PostResponse::from(post))
    }

    /// Fetch a single post
    #[instrument(skip(self))]
    pub async fn get(&self, post_id: i64) -> ServiceResult<PostResponse> {
        let post = self.require_post(post_id).await?;
        Ok(PostResponse::from(post))
    }

    /// List posts, newest first, with offset pagination
    ///
    /// The limit is clamped to `1..=MAX_PAGE_LIMIT`; a missing limit
    /// defaults to `DEFAULT_PAGE_LIMIT`.
    #[instrument(skip(self))]
    pub async fn list(&self, limit: Option<i64>, offset: Option<i64>) -> ServiceResult<PostListResponse> {
        let limit = limit.unwrap_or(DEFAULT_PAGE_LIMIT).clamp(1, MAX_PAGE_LIMIT);
        let offset = offset.unwrap_or(0).max(0);

        let page = PostPage { limit, offset };

        let posts = self.ctx.post_repo().list(&page).await?;
        let total = self.ctx.post_repo().count().await?;

        Ok(PostListResponse {
            posts: posts.iter().map(PostResponse::from).collect(),
            total,
            limit,
            offset,
        })
    }

    /// Update a post's title and content (owner only)
    ///
    /// An omitted field falls back to the stored value.
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        post_id: i64,
        user_id: i64,
        request: UpdatePostRequest,
    ) -> ServiceResult<PostResponse> {
        let post = self.require_post(post_id).await?;

        if !post.is_owned_by(user_id) {
            return Err(ServiceError::Domain(DomainError::NotPostOwner));
        }

        let title = request.title.as_deref().unwrap_or(&post.title);
        let content = request.content.as_deref().unwrap_or(&post.content);
        Post::validate(title, content)?;

        self.ctx.post_repo().update(post_id, title, content).await?;

        info!(post_id, user_id, "Post updated");

        let updated = self.require_post(post_id).await?;
        Ok(PostResponse::from(updated))
    }

    /// Delete a post (owner only); comments and likes cascade
    #[instrument(skip(self))]
    pub async fn delete(&self, post_id: i64, user_id: i64) -> ServiceResult<()> {
        let post = self.require_post(post_id).await?;

        if !post.is_owned_by(user_id) {
            return Err(ServiceError::Domain(DomainError::NotPostOwner));
        }

        self.ctx.post_repo().delete(post_id).await?;

        info!(post_id, user_id, "Post deleted");

        Ok(())
    }

    pub(super) async fn require_post(&self, post_id: i64) -> ServiceResult<Post> {
        self.ctx
            .post_repo()
            .find_by_id(post_id)
            .await?
            .ok_or(ServiceError::Domain(DomainError::PostNotFound(post_id)))
    }
}
