//! VerificationRecord - lifecycle of a single emailed code.

use crate::domain::foundation::{Timestamp, VerificationId};

/// Outcome of submitting a code against a verification record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptOutcome {
    /// Code matched; the record is now verified.
    Verified,
    /// Code did not match; the attempt counter was incremented.
    WrongCode,
    /// The record expired before this attempt.
    Expired,
    /// The attempt budget was already spent. Fails even with the correct
    /// code; the client must request a new one.
    MaxAttemptsExceeded,
}

/// A short-lived email verification code.
///
/// Usable only while `verified_at` is unset, `attempts` is below the
/// configured maximum, and the current time is before `expires_at`.
/// Name and surname are held here until the user row is created at the
/// first successful verification.
#[derive(Debug, Clone)]
pub struct VerificationRecord {
    pub id: VerificationId,
    /// Not unique: multiple attempts per email are allowed.
    pub email: String,
    pub name: String,
    pub surname: String,
    pub code: String,
    pub created_at: Timestamp,
    pub expires_at: Timestamp,
    pub verified_at: Option<Timestamp>,
    /// Failed attempts so far.
    pub attempts: u32,
}

impl VerificationRecord {
    /// Creates a fresh record expiring `ttl_minutes` from now.
    pub fn create(
        email: impl Into<String>,
        name: impl Into<String>,
        surname: impl Into<String>,
        code: impl Into<String>,
        ttl_minutes: i64,
    ) -> Self {
        let now = Timestamp::now();
        Self {
            id: VerificationId::new(),
            email: email.into(),
            name: name.into(),
            surname: surname.into(),
            code: code.into(),
            created_at: now,
            expires_at: now.add_minutes(ttl_minutes),
            verified_at: None,
            attempts: 0,
        }
    }

    /// True once the current time passes `expires_at`.
    pub fn is_expired(&self, now: Timestamp) -> bool {
        now.is_after(&self.expires_at)
    }

    /// Checks a submitted code and updates the record accordingly.
    ///
    /// Check order matters: expiry first, then the attempt budget, then
    /// the code itself. A correct code on the attempt after the budget is
    /// spent still fails.
    pub fn register_attempt(
        &mut self,
        submitted: &str,
        now: Timestamp,
        max_attempts: u32,
    ) -> AttemptOutcome {
        if self.is_expired(now) {
            return AttemptOutcome::Expired;
        }
        if self.attempts >= max_attempts {
            return AttemptOutcome::MaxAttemptsExceeded;
        }
        if submitted == self.code {
            self.verified_at = Some(now);
            AttemptOutcome::Verified
        } else {
            self.attempts += 1;
            AttemptOutcome::WrongCode
        }
    }
}
