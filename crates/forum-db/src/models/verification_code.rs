//! Verification code database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for verification_codes table
#[derive(Debug, Clone, FromRow)]
pub struct VerificationCodeModel {
    pub id: i64,
    pub email: String,
    pub code: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}
