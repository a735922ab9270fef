//! User domain - verified platform users.

mod errors;

pub use errors::UserError;

use crate::domain::foundation::{Timestamp, UserId};

/// A registered user.
///
/// Created exactly once, at the first successful code verification for the
/// email; immutable afterward except for administrative update/delete.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub surname: String,
    /// Globally unique.
    pub email: String,
    pub is_verified: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl User {
    /// Creates a verified user at verification time.
    pub fn register_verified(
        name: impl Into<String>,
        surname: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        let now = Timestamp::now();
        Self {
            id: UserId::new(),
            name: name.into(),
            surname: surname.into(),
            email: email.into(),
            is_verified: true,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial administrative update; `None` fields keep their current value.
#[derive(Debug, Clone, Default)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub email: Option<String>,
}
