//! Resend adapter - transactional email delivery.

mod mailer;

pub use mailer::ResendMailer;
