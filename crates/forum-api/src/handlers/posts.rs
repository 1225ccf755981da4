//! Post handlers
//!
//! Endpoints for creating, reading, updating, deleting, and listing posts.

use axum::{
    extract::{Path, State},
    Json,
};

use forum_service::dto::{CreatePostRequest, PostListResponse, PostResponse, UpdatePostRequest};
use forum_service::PostService;

use crate::extractors::{AuthUser, Pagination, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// List posts, newest first
///
/// GET /select/posts?limit=&offset=
pub async fn list_posts(
    State(state): State<AppState>,
    pagination: Pagination,
) -> ApiResult<Json<PostListResponse>> {
    let service = PostService::new(state.service_context());
    let response = service.list(pagination.limit, pagination.offset).await?;
    Ok(Json(response))
}

/// Create a post
///
/// POST /posts
pub async fn create_post(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreatePostRequest>,
) -> ApiResult<Created<Json<PostResponse>>> {
    let service = PostService::new(state.service_context());
    let response = service.create(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// Get a single post
///
/// GET /posts/:id
pub async fn get_post(
    State(state): State<AppState>,
    Path(post_id): Path<i64>,
) -> ApiResult<Json<PostResponse>> {
    let service = PostService::new(state.service_context());
    let response = service.get(post_id).await?;
    Ok(Json(response))
}

/// Update a post (owner only)
///
/// PUT /posts/:id
pub async fn update_post(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(post_id): Path<i64>,
    ValidatedJson(request): ValidatedJson<UpdatePostRequest>,
) -> ApiResult<Json<PostResponse>> {
    let service = PostService::new(state.service_context());
    let response = service.update(post_id, auth.user_id, request).await?;
    Ok(Json(response))
}

/// Delete a post (owner only); comments and likes cascade
///
/// DELETE /posts/:id
pub async fn delete_post(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(post_id): Path<i64>,
) -> ApiResult<NoContent> {
    let service = PostService::new(state.service_context());
    service.delete(post_id, auth.user_id).await?;
    Ok(NoContent)
}
