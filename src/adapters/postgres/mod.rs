//! PostgreSQL implementations of the repository ports.

mod admin_repository;
mod payment_repository;
mod tariff_repository;
mod user_repository;
mod verification_repository;
mod webhook_event_repository;

pub use admin_repository::PostgresAdminRepository;
pub use payment_repository::PostgresPaymentRepository;
pub use tariff_repository::{PostgresTariffFileRepository, PostgresTariffRepository};
pub use user_repository::PostgresUserRepository;
pub use verification_repository::PostgresVerificationRepository;
pub use webhook_event_repository::PostgresWebhookEventRepository;
