//! Database models with SQLx `FromRow` derives

mod comment;
mod post;
mod user;
mod verification_code;

pub use comment::CommentModel;
pub use post::PostModel;
pub use user::UserModel;
pub use verification_code::VerificationCodeModel;
