//! Mailer port - transactional email.

use async_trait::async_trait;
use thiserror::Error;

/// A file attached to an outgoing email.
#[derive(Debug, Clone)]
pub struct EmailAttachment {
    pub filename: String,
    pub content: Vec<u8>,
}

/// Transport-level failure from the email provider.
///
/// Callers in the webhook path catch and log this; it must never turn
/// into a webhook-processing failure (which would cause the gateway to
/// retry delivery unnecessarily).
#[derive(Debug, Clone, Error)]
#[error("email delivery failed: {message}")]
pub struct MailerError {
    pub message: String,
}

impl MailerError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Port for sending transactional email.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Sends the verification code for a registration attempt.
    async fn send_verification_code(
        &self,
        to_email: &str,
        name: &str,
        code: &str,
    ) -> Result<(), MailerError>;

    /// Sends a payment success notice, attaching the tariff PDFs that
    /// could be loaded.
    async fn send_payment_success(
        &self,
        to_email: &str,
        name: &str,
        tariff_name: &str,
        amount: i64,
        currency: &str,
        attachments: Vec<EmailAttachment>,
    ) -> Result<(), MailerError>;

    /// Sends a plain payment failure notice.
    async fn send_payment_failure(
        &self,
        to_email: &str,
        name: &str,
        tariff_name: &str,
        reason: &str,
    ) -> Result<(), MailerError>;
}
