//! Repository traits (ports)

mod repositories;

pub use repositories::{
    CommentRepository, LikeRepository, PostPage, PostRepository, RepoResult, UserRepository,
    VerificationCodeRepository,
};
