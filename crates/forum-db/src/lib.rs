//! # forum-db
//!
//! Database layer implementing repository traits with MySQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides MySQL implementations for all repository traits
//! defined in `forum-core`. It handles:
//!
//! - Connection pool management
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use forum_db::pool::{create_pool, DatabaseConfig};
//! use forum_db::repositories::MySqlUserRepository;
//! use forum_core::traits::UserRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env();
//!     let pool = create_pool(&config).await?;
//!     let user_repo = MySqlUserRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, DatabaseConfig, MySqlPool};
pub use repositories::{
    MySqlCommentRepository, MySqlLikeRepository, MySqlPostRepository, MySqlUserRepository,
    MySqlVerificationCodeRepository,
};
