//! UserRepository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::user::User;

use super::SaveResult;

/// Port for user persistence.
///
/// Email is globally unique; `insert` relies on a storage-level
/// uniqueness constraint so a concurrent registration race resolves to
/// exactly one created row.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts a user, returning `AlreadyExists` on an email conflict.
    async fn insert(&self, user: &User) -> Result<SaveResult, DomainError>;

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    async fn list(&self) -> Result<Vec<User>, DomainError>;

    async fn update(&self, user: &User) -> Result<(), DomainError>;

    async fn delete(&self, id: &UserId) -> Result<(), DomainError>;
}
