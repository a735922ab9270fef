//! AdminRepository port.

use async_trait::async_trait;

use crate::domain::admin::Admin;
use crate::domain::foundation::DomainError;
use crate::ports::SaveResult;

/// Port for admin account persistence.
///
/// Token validation trusts the JWT signature alone, so there is no
/// lookup by id; accounts are only resolved by email at login and seed
/// time.
#[async_trait]
pub trait AdminRepository: Send + Sync {
    /// Inserts a new admin. Returns `AlreadyExists` when the email is taken.
    async fn insert(&self, admin: &Admin) -> Result<SaveResult, DomainError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<Admin>, DomainError>;
}
