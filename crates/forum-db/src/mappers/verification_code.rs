//! Verification code entity <-> model mapper

use forum_core::entities::VerificationCode;

use crate::models::VerificationCodeModel;

/// Convert VerificationCodeModel to VerificationCode entity
impl From<VerificationCodeModel> for VerificationCode {
    fn from(model: VerificationCodeModel) -> Self {
        VerificationCode {
            id: model.id,
            email: model.email,
            code: model.code,
            created_at: model.created_at,
            expires_at: model.expires_at,
        }
    }
}
