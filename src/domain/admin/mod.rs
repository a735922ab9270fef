//! Admin domain - accounts and credential checks.

mod errors;
mod password;
mod token;

pub use errors::AdminError;
pub use password::{hash_password, verify_password};
pub use token::{decode_token, issue_token, AdminClaims};

use crate::domain::foundation::{AdminId, Timestamp};

/// An administrator account.
#[derive(Debug, Clone)]
pub struct Admin {
    pub id: AdminId,
    /// Unique.
    pub email: String,
    /// Argon2 PHC-format hash, never the plain password.
    pub password_hash: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Admin {
    /// Creates an admin from an already hashed password.
    pub fn create(email: impl Into<String>, password_hash: impl Into<String>) -> Self {
        let now = Timestamp::now();
        Self {
            id: AdminId::new(),
            email: email.into(),
            password_hash: password_hash.into(),
            created_at: now,
            updated_at: now,
        }
    }
}
