//! Domain entities - core business objects

mod comment;
mod post;
mod user;
mod verification_code;

pub use comment::Comment;
pub use post::{Post, MAX_CONTENT_LEN, MAX_TITLE_LEN};
pub use user::User;
pub use verification_code::{generate_code, VerificationCode, CODE_LENGTH, CODE_TTL_SECS};
