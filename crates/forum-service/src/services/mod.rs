//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod account;
pub mod comment;
pub mod context;
pub mod error;
pub mod like;
pub mod post;

// Re-export all services for convenience
pub use account::AccountService;
pub use comment::CommentService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use like::LikeService;
pub use post::PostService;
