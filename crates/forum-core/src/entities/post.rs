//! Post entity - represents a forum post

use chrono::{DateTime, Utc};

use crate::error::DomainError;

/// Maximum post title length in characters
pub const MAX_TITLE_LEN: usize = 100;
/// Maximum post content length in characters
pub const MAX_CONTENT_LEN: usize = 256;

/// Post entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub content: String,
    pub num_likes: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Validate title and content against the length limits.
    ///
    /// Exactly `MAX_TITLE_LEN` / `MAX_CONTENT_LEN` characters is accepted;
    /// one more is rejected. Counts characters, not bytes.
    pub fn validate(title: &str, content: &str) -> Result<(), DomainError> {
        if title.trim().is_empty() || content.trim().is_empty() {
            return Err(DomainError::ValidationError(
                "Title and content are required".to_string(),
            ));
        }
        if title.chars().count() > MAX_TITLE_LEN {
            return Err(DomainError::TitleTooLong { max: MAX_TITLE_LEN });
        }
        if content.chars().count() > MAX_CONTENT_LEN {
            return Err(DomainError::ContentTooLong {
                max: MAX_CONTENT_LEN,
            });
        }
        Ok(())
    }

    /// Check whether the given user owns this post
    #[inline]
    pub fn is_owned_by(&self, user_id: i64) -> bool {
        self.user_id == user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_boundary_lengths() {
        let title = "t".repeat(MAX_TITLE_LEN);
        let content = "c".repeat(MAX_CONTENT_LEN);
        assert!(Post::validate(&title, &content).is_ok());
    }

    #[test]
    fn test_validate_rejects_over_limit() {
        let title = "t".repeat(MAX_TITLE_LEN + 1);
        assert!(matches!(
            Post::validate(&title, "body"),
            Err(DomainError::TitleTooLong { .. })
        ));

        let content = "c".repeat(MAX_CONTENT_LEN + 1);
        assert!(matches!(
            Post::validate("title", &content),
            Err(DomainError::ContentTooLong { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_blank() {
        assert!(Post::validate("  ", "body").is_err());
        assert!(Post::validate("title", "").is_err());
    }

    #[test]
    fn test_ownership() {
        let post = Post {
            id: 1,
            user_id: 42,
            title: "hello".to_string(),
            content: "world".to_string(),
            num_likes: 0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        assert!(post.is_owned_by(42));
        assert!(!post.is_owned_by(7));
    }
}
