//! Foundation - shared value objects for the domain layer.

mod errors;
mod ids;
mod timestamp;

pub use errors::{DomainError, ErrorCode};
pub use ids::{AdminId, FileId, PaymentId, TariffId, UserId, VerificationId};
pub use timestamp::Timestamp;
