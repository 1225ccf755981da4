//! Like service
//!
//! Handles liking and unliking posts, keeping the denormalized counter
//! on the post in step with the like rows.

use forum_core::DomainError;
use tracing::{info, instrument};

use crate::dto::LikeResponse;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::post::PostService;

/// Like service
pub struct LikeService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> LikeService<'a> {
    /// Create a new LikeService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Like a post; duplicate likes are a conflict
    #[instrument(skip(self))]
    pub async fn like(&self, post_id: i64, user_id: i64) -> ServiceResult<LikeResponse> {
        PostService::new(self.ctx).require_post(post_id).await?;

        let inserted = self.ctx.like_repo().insert(user_id, post_id).await?;

        if !inserted {
            return Err(ServiceError::Domain(DomainError::AlreadyLiked));
        }

        self.ctx.like_repo().increment_count(post_id).await?;

        info!(post_id, user_id, "Post liked");

        self.response(post_id, true).await
    }

    /// Remove a like; unliking a post never liked is a conflict
    #[instrument(skip(self))]
    pub async fn unlike(&self, post_id: i64, user_id: i64) -> ServiceResult<LikeResponse> {
        PostService::new(self.ctx).require_post(post_id).await?;

        let removed = self.ctx.like_repo().remove(user_id, post_id).await?;

        if !removed {
            return Err(ServiceError::Domain(DomainError::NotLiked));
        }

        self.ctx.like_repo().decrement_count(post_id).await?;

        info!(post_id, user_id, "Post unliked");

        self.response(post_id, false).await
    }

    /// The reported count comes from the like rows, not the denormalized
    /// counter on the post.
    async fn response(&self, post_id: i64, liked: bool) -> ServiceResult<LikeResponse> {
        let num_likes = self.ctx.like_repo().count(post_id).await?;

        Ok(LikeResponse {
            post_id,
            num_likes,
            liked,
        })
    }
}
