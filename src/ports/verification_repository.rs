//! VerificationRepository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, Timestamp};
use crate::domain::verification::VerificationRecord;

/// Port for email verification records.
///
/// Emails are not unique here: each code request creates a new record,
/// and rate limiting and verification both act on the most recent one.
#[async_trait]
pub trait VerificationRepository: Send + Sync {
    async fn insert(&self, record: &VerificationRecord) -> Result<(), DomainError>;

    /// Most recent record for the email regardless of state, for rate
    /// limiting.
    async fn find_latest_by_email(
        &self,
        email: &str,
    ) -> Result<Option<VerificationRecord>, DomainError>;

    /// Most recent unverified record for the email, for code checks.
    async fn find_latest_unverified_by_email(
        &self,
        email: &str,
    ) -> Result<Option<VerificationRecord>, DomainError>;

    /// Persists attempt counter and `verified_at` changes.
    async fn update(&self, record: &VerificationRecord) -> Result<(), DomainError>;

    /// Deletes unverified records that expired before the cutoff.
    async fn delete_expired_before(&self, cutoff: Timestamp) -> Result<u64, DomainError>;
}
