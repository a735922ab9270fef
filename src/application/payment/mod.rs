//! Payment handlers.
//!
//! The orchestration core: intent creation against the gateway, webhook
//! ingestion with idempotent status transitions, and the status query the
//! client polls while the webhook races it.

mod create_intent;
mod get_status;
mod handle_webhook;

pub use create_intent::{CreateIntentCommand, CreateIntentHandler, CreateIntentResult};
pub use get_status::{GetStatusHandler, GetStatusQuery, GetStatusResult};
pub use handle_webhook::{HandleWebhookCommand, HandleWebhookHandler, HandleWebhookResult};
