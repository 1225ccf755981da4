//! Entity <-> model mappers

mod comment;
mod post;
mod user;
mod verification_code;
