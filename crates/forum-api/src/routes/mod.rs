//! Route definitions
//!
//! All API routes organized by domain and mounted at the root.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::handlers::{auth, comments, health, likes, posts};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for
/// separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(post_routes())
        .merge(comment_routes())
        .merge(like_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/send-code", post(auth::send_code))
        .route("/auth/verify-code", post(auth::verify_code))
        .route("/auth/check-email", get(auth::check_email))
        .route("/auth/signup", post(auth::signup))
        .route("/auth/login", post(auth::login))
        .route("/auth/logout", post(auth::logout))
        .route(
            "/auth/forgot-password/send-code",
            post(auth::forgot_password_send_code),
        )
        .route(
            "/auth/forgot-password/reset",
            post(auth::forgot_password_reset),
        )
        .route("/auth/me", get(auth::me))
}

/// Post routes
fn post_routes() -> Router<AppState> {
    Router::new()
        .route("/select/posts", get(posts::list_posts))
        .route("/posts", post(posts::create_post))
        .route("/posts/:id", get(posts::get_post))
        .route("/posts/:id", put(posts::update_post))
        .route("/posts/:id", delete(posts::delete_post))
}

/// Comment routes
fn comment_routes() -> Router<AppState> {
    Router::new()
        .route("/posts/:id/comments", get(comments::list_comments))
        .route("/posts/:id/comments", post(comments::create_comment))
        .route("/comments/:id", delete(comments::delete_comment))
}

/// Like routes
fn like_routes() -> Router<AppState> {
    Router::new()
        .route("/posts/:id/like", post(likes::like_post))
        .route("/posts/:id/unlike", post(likes::unlike_post))
}
