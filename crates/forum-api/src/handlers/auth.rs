//! Authentication handlers
//!
//! Endpoints for the email-verification signup flow, login, logout,
//! password reset, and the current-user probe.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use forum_service::dto::{
    AuthResponse, CheckEmailResponse, LoginRequest, MessageResponse, ResetPasswordRequest,
    SendCodeRequest, SignupRequest, UserResponse, VerifyCodeRequest, VerifyCodeResponse,
};
use forum_service::AccountService;

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Send a signup verification code
///
/// POST /auth/send-code
pub async fn send_code(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<SendCodeRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let service = AccountService::new(state.service_context());
    service.send_signup_code(request).await?;
    Ok(Json(MessageResponse::new("Verification code sent")))
}

/// Check a verification code without consuming it
///
/// POST /auth/verify-code
pub async fn verify_code(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<VerifyCodeRequest>,
) -> ApiResult<Json<VerifyCodeResponse>> {
    let service = AccountService::new(state.service_context());
    service.verify_code(request).await?;
    Ok(Json(VerifyCodeResponse { verified: true }))
}

/// Query parameters for the email availability check
#[derive(Debug, Deserialize)]
pub struct CheckEmailQuery {
    pub email: String,
}

/// Check whether an email is already registered
///
/// GET /auth/check-email?email=
pub async fn check_email(
    State(state): State<AppState>,
    Query(query): Query<CheckEmailQuery>,
) -> ApiResult<Json<CheckEmailResponse>> {
    let service = AccountService::new(state.service_context());
    let registered = service.check_email(&query.email).await?;
    Ok(Json(CheckEmailResponse {
        email: query.email,
        registered,
    }))
}

/// Create an account with a consumed verification code
///
/// POST /auth/signup
pub async fn signup(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<SignupRequest>,
) -> ApiResult<Created<Json<AuthResponse>>> {
    let service = AccountService::new(state.service_context());
    let response = service.signup(request).await?;
    Ok(Created(Json(response)))
}

/// Login with email and password
///
/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let service = AccountService::new(state.service_context());
    let response = service.login(request).await?;
    Ok(Json(response))
}

/// Logout
///
/// POST /auth/logout
///
/// Session tokens are stateless and not revocable server-side, so this
/// only acknowledges; the client discards its token.
pub async fn logout(auth: AuthUser) -> Json<MessageResponse> {
    tracing::info!(user_id = auth.user_id, "User logged out");
    Json(MessageResponse::new("Logged out"))
}

/// Send a password reset code
///
/// POST /auth/forgot-password/send-code
pub async fn forgot_password_send_code(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<SendCodeRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let service = AccountService::new(state.service_context());
    service.send_reset_code(request).await?;
    Ok(Json(MessageResponse::new("Password reset code sent")))
}

/// Reset a password with a valid reset code
///
/// POST /auth/forgot-password/reset
pub async fn forgot_password_reset(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<ResetPasswordRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let service = AccountService::new(state.service_context());
    service.reset_password(request).await?;
    Ok(Json(MessageResponse::new("Password reset")))
}

/// Get the authenticated user's profile
///
/// GET /auth/me
pub async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<UserResponse>> {
    let service = AccountService::new(state.service_context());
    let response = service.current_user(auth.user_id).await?;
    Ok(Json(response))
}
