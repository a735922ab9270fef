//! Payment domain - PaymentIntent lifecycle driven by Stripe webhooks.
//!
//! The status of a payment is owned by Stripe; this module mirrors it.
//! Every status change arrives as a signed webhook event, is deduplicated
//! against the webhook event log, and is applied last-writer-wins.

mod errors;
mod record;
mod status;
mod stripe_event;
mod webhook_errors;
mod webhook_verifier;

pub use errors::PaymentError;
pub use record::{PaymentMetadata, PaymentRecord};
pub use status::PaymentStatus;
pub use stripe_event::StripeEvent;
pub use webhook_errors::WebhookError;
pub use webhook_verifier::{SignatureHeader, StripeWebhookVerifier};

#[cfg(test)]
pub use webhook_verifier::compute_test_signature;
