//! Payment-specific error types.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | NotVerified | 403 |
//! | TariffNotFound | 404 |
//! | NotFound | 404 |
//! | Gateway | 502 |
//! | Infrastructure | 500 |

use thiserror::Error;

use crate::domain::foundation::{DomainError, PaymentId, TariffId};

/// Errors raised by the payment orchestrator.
#[derive(Debug, Clone, Error)]
pub enum PaymentError {
    /// The email has no verified user behind it; client should verify first.
    #[error("email not verified: {email}")]
    NotVerified { email: String },

    /// The requested tariff does not exist.
    #[error("tariff not found: {0}")]
    TariffNotFound(TariffId),

    /// The payment record does not exist.
    #[error("payment not found: {0}")]
    NotFound(PaymentId),

    /// The external gateway rejected or failed the call. Not retried
    /// locally; propagated to the caller.
    #[error("payment gateway error: {message}")]
    Gateway { message: String },

    /// Database or other infrastructure failure.
    #[error("payment infrastructure error: {0}")]
    Infrastructure(String),
}

impl PaymentError {
    pub fn not_verified(email: impl Into<String>) -> Self {
        PaymentError::NotVerified {
            email: email.into(),
        }
    }

    pub fn gateway(message: impl Into<String>) -> Self {
        PaymentError::Gateway {
            message: message.into(),
        }
    }
}

impl From<DomainError> for PaymentError {
    fn from(err: DomainError) -> Self {
        PaymentError::Infrastructure(err.to_string())
    }
}
