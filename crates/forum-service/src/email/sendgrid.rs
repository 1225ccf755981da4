//! SendGrid email sender
//!
//! Delivers mail through the SendGrid v3 REST API.

use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, instrument};

use forum_common::AppError;

use super::sender::EmailSender;

const SENDGRID_SEND_URL: &str = "https://api.sendgrid.com/v3/mail/send";

/// Email sender backed by the SendGrid v3 API
#[derive(Clone)]
pub struct SendgridEmailSender {
    client: reqwest::Client,
    api_key: String,
    from_address: String,
}

impl SendgridEmailSender {
    /// Create a new SendGrid sender
    #[must_use]
    pub fn new(api_key: String, from_address: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            from_address,
        }
    }

    #[instrument(skip(self, html))]
    async fn send_mail(&self, to: &str, subject: &str, html: &str) -> Result<(), AppError> {
        let payload = json!({
            "personalizations": [{ "to": [{ "email": to }] }],
            "from": { "email": self.from_address },
            "subject": subject,
            "content": [{ "type": "text/html", "value": html }],
        });

        let response = self
            .client
            .post(SENDGRID_SEND_URL)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| AppError::EmailDelivery(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = response.text().await.unwrap_or_default();
            return Err(AppError::EmailDelivery(format!(
                "SendGrid returned {status}: {detail}"
            )));
        }

        debug!(to, subject, "email accepted by SendGrid");
        Ok(())
    }
}

impl std::fmt::Debug for SendgridEmailSender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SendgridEmailSender")
            .field("from_address", &self.from_address)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl EmailSender for SendgridEmailSender {
    async fn send_verification_code(&self, to: &str, code: &str) -> Result<(), AppError> {
        let html = format!(
            "<p>Your verification code is <strong>{code}</strong>.</p>\
             <p>It expires in 10 minutes.</p>"
        );
        self.send_mail(to, "Your verification code", &html).await
    }

    async fn send_password_reset_code(&self, to: &str, code: &str) -> Result<(), AppError> {
        let html = format!(
            "<p>Your password reset code is <strong>{code}</strong>.</p>\
             <p>It expires in 10 minutes. If you did not request a reset, \
             you can ignore this mail.</p>"
        );
        self.send_mail(to, "Your password reset code", &html).await
    }

    async fn send_welcome(&self, to: &str) -> Result<(), AppError> {
        let html = "<p>Your account has been created. Welcome to the forum!</p>";
        self.send_mail(to, "Welcome to the forum", html).await
    }
}
