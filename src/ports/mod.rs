//! Ports - interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Persistence Ports
//!
//! - `UserRepository`, `TariffRepository`, `TariffFileRepository`,
//!   `PaymentRepository`, `VerificationRepository`, `AdminRepository`
//! - `WebhookEventRepository` - webhook idempotency log
//!
//! ## External Service Ports
//!
//! - `PaymentGateway` - Stripe PaymentIntent creation
//! - `Mailer` - transactional email (Resend)
//! - `FileStorage` - PDF bytes on disk

mod admin_repository;
mod file_storage;
mod mailer;
mod payment_gateway;
mod payment_repository;
mod tariff_repository;
mod user_repository;
mod verification_repository;
mod webhook_event_repository;

pub use admin_repository::AdminRepository;
pub use file_storage::{FileStorage, StorageError};
pub use mailer::{EmailAttachment, Mailer, MailerError};
pub use payment_gateway::{CreateIntentRequest, GatewayError, PaymentGateway, PaymentIntent};
pub use payment_repository::PaymentRepository;
pub use tariff_repository::{TariffFileRepository, TariffRepository};
pub use user_repository::UserRepository;
pub use verification_repository::VerificationRepository;
pub use webhook_event_repository::{SaveResult, WebhookEventRecord, WebhookEventRepository};
