//! Service context - dependency container for services
//!
//! Holds all repositories, the token service, and the email sender.

use std::sync::Arc;

use forum_common::auth::TokenService;
use forum_core::traits::{
    CommentRepository, LikeRepository, PostRepository, UserRepository,
    VerificationCodeRepository,
};

use crate::email::EmailSender;

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Database repositories
/// - Token service for session authentication
/// - Email sender for verification and reset codes
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    user_repo: Arc<dyn UserRepository>,
    code_repo: Arc<dyn VerificationCodeRepository>,
    post_repo: Arc<dyn PostRepository>,
    comment_repo: Arc<dyn CommentRepository>,
    like_repo: Arc<dyn LikeRepository>,

    // Services
    token_service: Arc<TokenService>,
    email_sender: Arc<dyn EmailSender>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        code_repo: Arc<dyn VerificationCodeRepository>,
        post_repo: Arc<dyn PostRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        like_repo: Arc<dyn LikeRepository>,
        token_service: Arc<TokenService>,
        email_sender: Arc<dyn EmailSender>,
    ) -> Self {
        Self {
            user_repo,
            code_repo,
            post_repo,
            comment_repo,
            like_repo,
            token_service,
            email_sender,
        }
    }

    // === Repositories ===

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the verification code repository
    pub fn code_repo(&self) -> &dyn VerificationCodeRepository {
        self.code_repo.as_ref()
    }

    /// Get the post repository
    pub fn post_repo(&self) -> &dyn PostRepository {
        self.post_repo.as_ref()
    }

    /// Get the comment repository
    pub fn comment_repo(&self) -> &dyn CommentRepository {
        self.comment_repo.as_ref()
    }

    /// Get the like repository
    pub fn like_repo(&self) -> &dyn LikeRepository {
        self.like_repo.as_ref()
    }

    // === Services ===

    /// Get the token service
    pub fn token_service(&self) -> &TokenService {
        self.token_service.as_ref()
    }

    /// Get the email sender
    pub fn email_sender(&self) -> &dyn EmailSender {
        self.email_sender.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("token_service", &self.token_service)
            .finish_non_exhaustive()
    }
}

/// Builder for creating ServiceContext with custom configuration
pub struct ServiceContextBuilder {
    user_repo: Option<Arc<dyn UserRepository>>,
    code_repo: Option<Arc<dyn VerificationCodeRepository>>,
    post_repo: Option<Arc<dyn PostRepository>>,
    comment_repo: Option<Arc<dyn CommentRepository>>,
    like_repo: Option<Arc<dyn LikeRepository>>,
    token_service: Option<Arc<TokenService>>,
    email_sender: Option<Arc<dyn EmailSender>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            user_repo: None,
            code_repo: None,
            post_repo: None,
            comment_repo: None,
            like_repo: None,
            token_service: None,
            email_sender: None,
        }
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn code_repo(mut self, repo: Arc<dyn VerificationCodeRepository>) -> Self {
        self.code_repo = Some(repo);
        self
    }

    pub fn post_repo(mut self, repo: Arc<dyn PostRepository>) -> Self {
        self.post_repo = Some(repo);
        self
    }

    pub fn comment_repo(mut self, repo: Arc<dyn CommentRepository>) -> Self {
        self.comment_repo = Some(repo);
        self
    }

    pub fn like_repo(mut self, repo: Arc<dyn LikeRepository>) -> Self {
        self.like_repo = Some(repo);
        self
    }

    pub fn token_service(mut self, service: Arc<TokenService>) -> Self {
        self.token_service = Some(service);
        self
    }

    pub fn email_sender(mut self, sender: Arc<dyn EmailSender>) -> Self {
        self.email_sender = Some(sender);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.user_repo
                .ok_or_else(|| super::error::ServiceError::validation("user_repo is required"))?,
            self.code_repo
                .ok_or_else(|| super::error::ServiceError::validation("code_repo is required"))?,
            self.post_repo
                .ok_or_else(|| super::error::ServiceError::validation("post_repo is required"))?,
            self.comment_repo
                .ok_or_else(|| super::error::ServiceError::validation("comment_repo is required"))?,
            self.like_repo
                .ok_or_else(|| super::error::ServiceError::validation("like_repo is required"))?,
            self.token_service
                .ok_or_else(|| super::error::ServiceError::validation("token_service is required"))?,
            self.email_sender
                .ok_or_else(|| super::error::ServiceError::validation("email_sender is required"))?,
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
