//! Verification code entity - short-lived, single-use email credential

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

/// Number of digits in a verification code
pub const CODE_LENGTH: usize = 6;
/// Code lifetime in seconds (10 minutes)
pub const CODE_TTL_SECS: i64 = 600;

/// Verification code entity, keyed by email rather than user id since
/// signup codes are issued before a user row exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationCode {
    pub id: i64,
    pub email: String,
    pub code: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl VerificationCode {
    /// A code is valid strictly before its expiry instant; exactly at
    /// `expires_at` it is already rejected.
    #[inline]
    pub fn is_valid(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }

    /// Expiry timestamp for a code created at `now`
    pub fn expiry_from(now: DateTime<Utc>) -> DateTime<Utc> {
        now + Duration::seconds(CODE_TTL_SECS)
    }
}

/// Generate a random zero-padded 6-digit code.
///
/// No uniqueness guarantee across emails; codes are only meaningful
/// paired with an email.
pub fn generate_code() -> String {
    let mut rng = rand::thread_rng();
    format!("{:06}", rng.gen_range(0..1_000_000))
}
