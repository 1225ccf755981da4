//! Account service
//!
//! Handles the email-verification signup flow, login, password reset,
//! and session token issuance.

use forum_common::auth::{hash_password, validate_password_strength, verify_password};
use forum_common::AppError;
use forum_core::entities::{generate_code, VerificationCode};
use forum_core::DomainError;
use tracing::{info, instrument, warn};

use crate::dto::{
    AuthResponse, LoginRequest, ResetPasswordRequest, SendCodeRequest, SignupRequest,
    UserResponse, VerifyCodeRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// How many previous hashes `is_password_in_history` inspects
pub const PASSWORD_HISTORY_LIMIT: i64 = 5;

/// Account service
pub struct AccountService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AccountService<'a> {
    /// Create a new AccountService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Issue a signup verification code and email it
    ///
    /// Rejected for already-registered emails so a code can never be used
    /// to create a duplicate account.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn send_signup_code(&self, request: SendCodeRequest) -> ServiceResult<()> {
        if self.ctx.user_repo().email_exists(&request.email).await? {
            return Err(ServiceError::Domain(DomainError::EmailAlreadyExists));
        }

        let code = self.issue_code(&request.email).await?;

        self.ctx
            .email_sender()
            .send_verification_code(&request.email, &code)
            .await
            .map_err(ServiceError::from)?;

        info!(email = %request.email, "signup verification code issued");

        Ok(())
    }

    /// Check a verification code without consuming it
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn verify_code(&self, request: VerifyCodeRequest) -> ServiceResult<()> {
        let valid = self
            .ctx
            .code_repo()
            .check(&request.email, &request.code)
            .await?;

        if !valid {
            return Err(ServiceError::App(AppError::InvalidCode));
        }

        Ok(())
    }

    /// Check whether an email is already registered
    #[instrument(skip(self))]
    pub async fn check_email(&self, email: &str) -> ServiceResult<bool> {
        Ok(self.ctx.user_repo().email_exists(email).await?)
    }

    /// Create an account after consuming the signup verification code
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn signup(&self, request: SignupRequest) -> ServiceResult<AuthResponse> {
        // Validate password strength before touching any state
        validate_password_strength(&request.password).map_err(ServiceError::from)?;

        // Single-use: the code is gone after this call even if a later
        // step fails, so a retry needs a fresh code
        let consumed = self
            .ctx
            .code_repo()
            .consume(&request.email, &request.code)
            .await?;

        if !consumed {
            return Err(ServiceError::App(AppError::InvalidCode));
        }

        if self.ctx.user_repo().email_exists(&request.email).await? {
            return Err(ServiceError::Domain(DomainError::EmailAlreadyExists));
        }

        let password_hash =
            hash_password(&request.password).map_err(|e| ServiceError::internal(e.to_string()))?;

        let user = self
            .ctx
            .user_repo()
            .create(&request.email, &password_hash)
            .await?;

        // The code was just consumed, so the address is verified
        self.ctx.user_repo().mark_verified(user.id).await?;

        info!(user_id = user.id, "User registered successfully");

        // Welcome mail is a courtesy; signup already succeeded
        if let Err(e) = self.ctx.email_sender().send_welcome(&request.email).await {
            warn!(email = %request.email, error = %e, "failed to send welcome email");
        }

        let mut user = user;
        user.mark_verified();

        self.issue_session(user)
    }

    /// Login with email and password
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<AuthResponse> {
        // Unknown email and wrong password are indistinguishable to the caller
        let user = self
            .ctx
            .user_repo()
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| {
                warn!(email = %request.email, "Login failed: user not found");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(&request.email)
            .await?
            .ok_or_else(|| {
                warn!(user_id = user.id, "Login failed: no password hash");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        let is_valid = verify_password(&request.password, &password_hash)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        if !is_valid {
            warn!(user_id = user.id, "Login failed: invalid password");
            return Err(ServiceError::App(AppError::InvalidCredentials));
        }

        info!(user_id = user.id, "User logged in successfully");

        self.issue_session(user)
    }

    /// Issue a password reset code and email it
    ///
    /// Unlike the signup code, this one requires the email to be registered.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn send_reset_code(&self, request: SendCodeRequest) -> ServiceResult<()> {
        if !self.ctx.user_repo().email_exists(&request.email).await? {
            return Err(ServiceError::Domain(DomainError::EmailNotRegistered));
        }

        let code = self.issue_code(&request.email).await?;

        self.ctx
            .email_sender()
            .send_password_reset_code(&request.email, &code)
            .await
            .map_err(ServiceError::from)?;

        info!(email = %request.email, "password reset code issued");

        Ok(())
    }

    /// Reset a password using a valid reset code
    ///
    /// The code is checked but not consumed; it lapses at its expiry.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn reset_password(&self, request: ResetPasswordRequest) -> ServiceResult<()> {
        let valid = self
            .ctx
            .code_repo()
            .check(&request.email, &request.code)
            .await?;

        if !valid {
            return Err(ServiceError::App(AppError::InvalidCode));
        }

        validate_password_strength(&request.new_password).map_err(ServiceError::from)?;

        let user = self
            .ctx
            .user_repo()
            .find_by_email(&request.email)
            .await?
            .ok_or(ServiceError::Domain(DomainError::EmailNotRegistered))?;

        let current_hash = self
            .ctx
            .user_repo()
            .get_password_hash(&request.email)
            .await?
            .ok_or(ServiceError::Domain(DomainError::EmailNotRegistered))?;

        let same_as_current = verify_password(&request.new_password, &current_hash)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        if same_as_current {
            return Err(ServiceError::Domain(DomainError::PasswordUnchanged));
        }

        let new_hash = hash_password(&request.new_password)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        self.ctx
            .user_repo()
            .update_password(user.id, &new_hash)
            .await?;

        info!(user_id = user.id, "Password reset successfully");

        Ok(())
    }

    /// Fetch the authenticated user's current profile
    #[instrument(skip(self))]
    pub async fn current_user(&self, user_id: i64) -> ServiceResult<UserResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        Ok(UserResponse::from(user))
    }

    /// Check a candidate password against the user's recent password hashes
    #[instrument(skip(self, password))]
    pub async fn is_password_in_history(&self, user_id: i64, password: &str) -> ServiceResult<bool> {
        let hashes = self
            .ctx
            .user_repo()
            .recent_password_hashes(user_id, PASSWORD_HISTORY_LIMIT)
            .await?;

        for hash in &hashes {
            let matches = verify_password(password, hash)
                .map_err(|e| ServiceError::internal(e.to_string()))?;
            if matches {
                return Ok(true);
            }
        }

        Ok(false)
    }

    /// Generate a fresh code and store it, replacing any earlier code
    /// for the same email
    async fn issue_code(&self, email: &str) -> ServiceResult<String> {
        let code = generate_code();
        let expires_at = VerificationCode::expiry_from(chrono::Utc::now());

        self.ctx.code_repo().store(email, &code, expires_at).await?;

        Ok(code)
    }

    fn issue_session(&self, user: forum_core::entities::User) -> ServiceResult<AuthResponse> {
        let session = self
            .ctx
            .token_service()
            .issue(user.id, &user.email)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        Ok(AuthResponse::new(
            session.token,
            session.expires_in,
            UserResponse::from(user),
        ))
    }
}
