//! Email sender trait

use async_trait::async_trait;

use forum_common::AppError;

/// Abstraction over an outgoing email provider
///
/// Services depend on message kinds, not on subjects or bodies; each
/// implementation owns its own templates.
#[async_trait]
pub trait EmailSender: Send + Sync {
    /// Send a signup verification code
    ///
    /// # Errors
    /// Returns `AppError::EmailDelivery` when the provider rejects the message
    async fn send_verification_code(&self, to: &str, code: &str) -> Result<(), AppError>;

    /// Send a password reset code
    ///
    /// # Errors
    /// Returns `AppError::EmailDelivery` when the provider rejects the message
    async fn send_password_reset_code(&self, to: &str, code: &str) -> Result<(), AppError>;

    /// Send the post-signup welcome mail
    ///
    /// # Errors
    /// Returns `AppError::EmailDelivery` when the provider rejects the message
    async fn send_welcome(&self, to: &str) -> Result<(), AppError>;
}
