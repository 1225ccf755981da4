//! User entity - represents a forum account

use chrono::{DateTime, Utc};

/// User entity representing a registered forum account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub email_verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new User with required fields
    pub fn new(id: i64, email: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            email,
            email_verified: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Mark the account's email as verified
    pub fn mark_verified(&mut self) {
        self.email_verified = true;
        self.updated_at = Utc::now();
    }
}
