//! Verification-specific error types.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | RateLimited | 429 |
//! | InvalidCode | 400 |
//! | CodeExpired | 400 |
//! | MaxAttemptsExceeded | 400 |
//! | EmailAlreadyVerified | 409 |
//! | EmailAlreadyRegistered | 409 |
//! | EmailDelivery | 502 |
//! | Infrastructure | 500 |

use thiserror::Error;

use crate::domain::foundation::DomainError;

/// Errors raised by the verification flow.
#[derive(Debug, Clone, Error)]
pub enum VerificationError {
    /// A code was requested less than the rate-limit window ago.
    #[error("verification code requested too soon, retry in {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    /// The submitted code does not match, or no usable code exists.
    #[error("invalid verification code")]
    InvalidCode,

    /// The code expired before verification.
    #[error("verification code expired")]
    CodeExpired,

    /// Too many wrong attempts; a new code must be requested.
    #[error("maximum verification attempts exceeded")]
    MaxAttemptsExceeded,

    /// The email already belongs to a verified user.
    #[error("email already verified: {email}")]
    EmailAlreadyVerified { email: String },

    /// A concurrent registration won the uniqueness race on the email.
    #[error("email already registered: {email}")]
    EmailAlreadyRegistered { email: String },

    /// The email provider failed at the transport level.
    #[error("failed to deliver verification email: {0}")]
    EmailDelivery(String),

    /// Database or other infrastructure failure.
    #[error("verification infrastructure error: {0}")]
    Infrastructure(String),
}

impl VerificationError {
    pub fn email_already_verified(email: impl Into<String>) -> Self {
        VerificationError::EmailAlreadyVerified {
            email: email.into(),
        }
    }

    pub fn email_already_registered(email: impl Into<String>) -> Self {
        VerificationError::EmailAlreadyRegistered {
            email: email.into(),
        }
    }
}

impl From<DomainError> for VerificationError {
    fn from(err: DomainError) -> Self {
        VerificationError::Infrastructure(err.to_string())
    }
}
