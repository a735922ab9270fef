//! Verification handlers - emailed codes and first-time registration.

mod send_code;
#[cfg(test)]
pub(crate) mod test_support;
mod verify_code;

pub use send_code::{SendCodeCommand, SendCodeHandler, SendCodeResult};
pub use verify_code::{VerifyCodeCommand, VerifyCodeHandler, VerifyCodeResult};
