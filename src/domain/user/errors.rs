//! User management error types.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | NotFound | 404 |
//! | EmailNotFound | 404 |
//! | EmailTaken | 409 |
//! | Infrastructure | 500 |

use thiserror::Error;

use crate::domain::foundation::{DomainError, UserId};

/// Errors raised by administrative user management.
#[derive(Debug, Clone, Error)]
pub enum UserError {
    #[error("user not found: {0}")]
    NotFound(UserId),

    #[error("no user for email: {email}")]
    EmailNotFound { email: String },

    /// Another user already owns this email.
    #[error("email already registered: {email}")]
    EmailTaken { email: String },

    #[error("user infrastructure error: {0}")]
    Infrastructure(String),
}

impl UserError {
    pub fn email_taken(email: impl Into<String>) -> Self {
        UserError::EmailTaken {
            email: email.into(),
        }
    }
}

impl From<DomainError> for UserError {
    fn from(err: DomainError) -> Self {
        UserError::Infrastructure(err.to_string())
    }
}
