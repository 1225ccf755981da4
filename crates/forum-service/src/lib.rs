//! # forum-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod email;
pub mod services;

pub use email::{ConsoleEmailSender, EmailSender, NoopEmailSender, SendgridEmailSender};
pub use services::{
    AccountService, CommentService, LikeService, PostService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult,
};
