//! Repository traits - abstractions over persistence
//!
//! Implementations live in `forum-db`; services depend only on these traits
//! so business logic stays testable with in-memory fakes.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::entities::{Comment, Post, User};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

/// Page parameters for post listing
#[derive(Debug, Clone, Copy)]
pub struct PostPage {
    pub limit: i64,
    pub offset: i64,
}

/// User repository trait
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<User>>;

    /// Find a user by email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Check whether an email is already registered
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Create a new (unverified) user with a pre-hashed password
    async fn create(&self, email: &str, password_hash: &str) -> RepoResult<User>;

    /// Fetch the stored password hash for an email
    async fn get_password_hash(&self, email: &str) -> RepoResult<Option<String>>;

    /// Mark a user's email as verified
    async fn mark_verified(&self, id: i64) -> RepoResult<()>;

    /// Replace a user's password hash, recording the previous hash in the
    /// password history ledger (history write is best effort)
    async fn update_password(&self, id: i64, password_hash: &str) -> RepoResult<()>;

    /// Most recent password hashes for a user, newest first
    async fn recent_password_hashes(&self, user_id: i64, limit: i64) -> RepoResult<Vec<String>>;
}

/// Verification code repository trait
///
/// Codes are keyed by email; at most one live code per email.
#[async_trait]
pub trait VerificationCodeRepository: Send + Sync {
    /// Store a fresh code for an email, replacing any previous one
    async fn store(&self, email: &str, code: &str, expires_at: DateTime<Utc>) -> RepoResult<()>;

    /// Non-destructive check: does an unexpired matching code exist?
    async fn check(&self, email: &str, code: &str) -> RepoResult<bool>;

    /// Consume a code: returns true and deletes it if an unexpired match
    /// exists, false otherwise
    async fn consume(&self, email: &str, code: &str) -> RepoResult<bool>;
}

/// Post repository trait
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Create a new post
    async fn create(&self, user_id: i64, title: &str, content: &str) -> RepoResult<Post>;

    /// Find a post by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Post>>;

    /// List posts, newest first
    async fn list(&self, page: &PostPage) -> RepoResult<Vec<Post>>;

    /// Total number of posts
    async fn count(&self) -> RepoResult<i64>;

    /// Update a post's title and content
    async fn update(&self, id: i64, title: &str, content: &str) -> RepoResult<()>;

    /// Delete a post (comments and likes cascade)
    async fn delete(&self, id: i64) -> RepoResult<()>;
}

/// Comment repository trait
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Create a comment on a post
    async fn create(&self, post_id: i64, user_id: i64, content: &str) -> RepoResult<Comment>;

    /// Find a comment by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Comment>>;

    /// List comments for a post, oldest first
    async fn list_by_post(&self, post_id: i64) -> RepoResult<Vec<Comment>>;

    /// Delete a comment
    async fn delete(&self, id: i64) -> RepoResult<()>;
}

/// Like repository trait
#[async_trait]
pub trait LikeRepository: Send + Sync {
    /// Record a like; returns false when the pair already exists
    async fn insert(&self, user_id: i64, post_id: i64) -> RepoResult<bool>;

    /// Remove a like; returns false when no such pair exists
    async fn remove(&self, user_id: i64, post_id: i64) -> RepoResult<bool>;

    /// Increment a post's denormalized like counter
    async fn increment_count(&self, post_id: i64) -> RepoResult<()>;

    /// Decrement a post's denormalized like counter, floored at zero
    async fn decrement_count(&self, post_id: i64) -> RepoResult<()>;

    /// Number of like rows for a post
    async fn count(&self, post_id: i64) -> RepoResult<i64>;
}
