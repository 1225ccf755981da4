//! Console and noop email senders for development and tests

use async_trait::async_trait;
use tracing::info;

use forum_common::AppError;

use super::sender::EmailSender;

/// Email sender that logs messages instead of delivering them
#[derive(Debug, Clone, Default)]
pub struct ConsoleEmailSender;

impl ConsoleEmailSender {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl EmailSender for ConsoleEmailSender {
    async fn send_verification_code(&self, to: &str, code: &str) -> Result<(), AppError> {
        info!(to, code, "verification code email (console sender)");
        Ok(())
    }

    async fn send_password_reset_code(&self, to: &str, code: &str) -> Result<(), AppError> {
        info!(to, code, "password reset email (console sender)");
        Ok(())
    }

    async fn send_welcome(&self, to: &str) -> Result<(), AppError> {
        info!(to, "welcome email (console sender)");
        Ok(())
    }
}

/// Email sender that silently discards messages
#[derive(Debug, Clone, Default)]
pub struct NoopEmailSender;

impl NoopEmailSender {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl EmailSender for NoopEmailSender {
    async fn send_verification_code(&self, _to: &str, _code: &str) -> Result<(), AppError> {
        Ok(())
    }

    async fn send_password_reset_code(&self, _to: &str, _code: &str) -> Result<(), AppError> {
        Ok(())
    }

    async fn send_welcome(&self, _to: &str) -> Result<(), AppError> {
        Ok(())
    }
}
