//! Errors raised during webhook verification and processing.

use thiserror::Error;

use crate::domain::foundation::DomainError;

/// Webhook processing errors.
///
/// Signature and timestamp failures are security errors: they must be
/// rejected before any state mutation. Notification failures never appear
/// here; they are logged by the orchestrator and decoupled from the
/// webhook response.
#[derive(Debug, Clone, Error)]
pub enum WebhookError {
    /// HMAC signature did not match the payload.
    #[error("webhook signature verification failed")]
    InvalidSignature,

    /// Signed timestamp is older than the replay window.
    #[error("webhook timestamp outside the allowed window")]
    TimestampOutOfRange,

    /// Signed timestamp is too far in the future.
    #[error("webhook timestamp is in the future")]
    InvalidTimestamp,

    /// Signature header or JSON payload could not be parsed.
    #[error("failed to parse webhook: {0}")]
    ParseError(String),

    /// Repository failure while recording or applying the event.
    #[error("webhook persistence failed: {0}")]
    Database(String),
}

impl From<DomainError> for WebhookError {
    fn from(err: DomainError) -> Self {
        WebhookError::Database(err.to_string())
    }
}
