//! Comment service
//!
//! Handles comments on posts with ownership checks for deletion.

use forum_core::DomainError;
use tracing::{info, instrument};

use crate::dto::{CommentResponse, CreateCommentRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::post::PostService;

/// Comment service
pub struct CommentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommentService<'a> {
    /// Create a new CommentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a comment on a post
    #[instrument(skip(self, request))]
    pub async fn create(
        &self,
        post_id: i64,
        user_id: i64,
        request: CreateCommentRequest,
    ) -> ServiceResult<CommentResponse> {
        if request.content.trim().is_empty() {
            return Err(ServiceError::Domain(DomainError::ValidationError(
                "Comment content must not be blank".to_string(),
            )));
        }

        // The post must still exist at comment time
        PostService::new(self.ctx).require_post(post_id).await?;

        let comment = self
            .ctx
            .comment_repo()
            .create(post_id, user_id, &request.content)
            .await?;

        info!(comment_id = comment.id, post_id, user_id, "Comment created");

        Ok(CommentResponse::from(comment))
    }

    /// List comments on a post, oldest first
    #[instrument(skip(self))]
    pub async fn list_for_post(&self, post_id: i64) -> ServiceResult<Vec<CommentResponse>> {
        PostService::new(self.ctx).require_post(post_id).await?;

        let comments = self.ctx.comment_repo().list_by_post(post_id).await?;

        Ok(comments.iter().map(CommentResponse::from).collect())
    }

    /// Delete a comment (owner only)
    #[instrument(skip(self))]
    pub async fn delete(&self, comment_id: i64, user_id: i64) -> ServiceResult<()> {
        let comment = self
            .ctx
            .comment_repo()
            .find_by_id(comment_id)
            .await?
            .ok_or(ServiceError::Domain(DomainError::CommentNotFound(
                comment_id,
            )))?;

        if !comment.is_owned_by(user_id) {
            return Err(ServiceError::Domain(DomainError::NotCommentOwner));
        }

        self.ctx.comment_repo().delete(comment_id).await?;

        info!(comment_id, user_id, "Comment deleted");

        Ok(())
    }
}
