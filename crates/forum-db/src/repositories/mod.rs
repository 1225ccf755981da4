//! MySQL repository implementations

pub mod error;

mod comment;
mod like;
mod post;
mod user;
mod verification_code;

pub use comment::MySqlCommentRepository;
pub use like::MySqlLikeRepository;
pub use post::MySqlPostRepository;
pub use user::MySqlUserRepository;
pub use verification_code::MySqlVerificationCodeRepository;
