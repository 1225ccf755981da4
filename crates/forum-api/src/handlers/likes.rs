//! Like handlers

use axum::{
    extract::{Path, State},
    Json,
};

use forum_service::dto::LikeResponse;
use forum_service::LikeService;

use crate::extractors::AuthUser;
use crate::response::ApiResult;
use crate::state::AppState;

/// Like a post
///
/// POST /posts/:id/like
pub async fn like_post(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(post_id): Path<i64>,
) -> ApiResult<Json<LikeResponse>> {
    let service = LikeService::new(state.service_context());
    let response = service.like(post_id, auth.user_id).await?;
    Ok(Json(response))
}

/// Remove a like from a post
///
/// POST /posts/:id/unlike
pub async fn unlike_post(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(post_id): Path<i64>,
) -> ApiResult<Json<LikeResponse>> {
    let service = LikeService::new(state.service_context());
    let response = service.unlike(post_id, auth.user_id).await?;
    Ok(Json(response))
}
