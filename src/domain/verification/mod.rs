//! Verification domain - short-lived email verification codes.

mod code;
mod errors;
mod record;

pub use code::generate_code;
pub use errors::VerificationError;
pub use record::{AttemptOutcome, VerificationRecord};
