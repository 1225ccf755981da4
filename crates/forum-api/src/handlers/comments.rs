//! Comment handlers

use axum::{
    extract::{Path, State},
    Json,
};

use forum_service::dto::{CommentResponse, CreateCommentRequest};
use forum_service::CommentService;

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// List comments on a post, oldest first
///
/// GET /posts/:id/comments
pub async fn list_comments(
    State(state): State<AppState>,
    Path(post_id): Path<i64>,
) -> ApiResult<Json<Vec<CommentResponse>>> {
    let service = CommentService::new(state.service_context());
    let response = service.list_for_post(post_id).await?;
    Ok(Json(response))
}

/// Create a comment on a post
///
/// POST /posts/:id/comments
pub async fn create_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(post_id): Path<i64>,
    ValidatedJson(request): ValidatedJson<CreateCommentRequest>,
) -> ApiResult<Created<Json<CommentResponse>>> {
    let service = CommentService::new(state.service_context());
    let response = service.create(post_id, auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// Delete a comment (owner only)
///
/// DELETE /comments/:id
pub async fn delete_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(comment_id): Path<i64>,
) -> ApiResult<NoContent> {
    let service = CommentService::new(state.service_context());
    service.delete(comment_id, auth.user_id).await?;
    Ok(NoContent)
}
