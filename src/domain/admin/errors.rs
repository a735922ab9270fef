//! Admin-specific error types.

use thiserror::Error;

use crate::domain::foundation::DomainError;

/// Errors raised by admin authentication and management.
#[derive(Debug, Clone, Error)]
pub enum AdminError {
    /// Wrong email or password; deliberately not distinguished.
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("admin already exists: {email}")]
    AlreadyExists { email: String },

    #[error("invalid or expired token")]
    InvalidToken,

    #[error("admin infrastructure error: {0}")]
    Infrastructure(String),
}

impl AdminError {
    pub fn already_exists(email: impl Into<String>) -> Self {
        AdminError::AlreadyExists {
            email: email.into(),
        }
    }
}

impl From<DomainError> for AdminError {
    fn from(err: DomainError) -> Self {
        AdminError::Infrastructure(err.to_string())
    }
}
