//! # forum-core
//!
//! Domain layer containing entities, domain errors, and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;

// Re-export commonly used types at crate root
pub use entities::{
    generate_code, Comment, Post, User, VerificationCode, CODE_LENGTH, CODE_TTL_SECS,
    MAX_CONTENT_LEN, MAX_TITLE_LEN,
};
pub use error::DomainError;
pub use traits::{
    CommentRepository, LikeRepository, PostPage, PostRepository, RepoResult, UserRepository,
    VerificationCodeRepository,
};
