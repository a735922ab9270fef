//! SendCodeHandler - issues a verification code to an email address.

use std::sync::Arc;

use crate::domain::foundation::Timestamp;
use crate::domain::verification::{generate_code, VerificationError, VerificationRecord};
use crate::ports::{Mailer, UserRepository, VerificationRepository};

#[derive(Debug, Clone)]
pub struct SendCodeCommand {
    pub name: String,
    pub surname: String,
    pub email: String,
}

#[derive(Debug, Clone)]
pub struct SendCodeResult {
    pub email: String,
    /// Seconds until the issued code expires.
    pub expires_in_secs: u64,
}

/// Handler for issuing verification codes.
///
/// Per-email rate limiting is keyed off the latest stored record; the
/// record is persisted only after the email actually went out, so a
/// delivery failure leaves nothing behind.
pub struct SendCodeHandler {
    users: Arc<dyn UserRepository>,
    verifications: Arc<dyn VerificationRepository>,
    mailer: Arc<dyn Mailer>,
    code_length: usize,
    ttl_minutes: i64,
    resend_interval_secs: i64,
}

impl SendCodeHandler {
    pub fn new(
        users: Arc<dyn UserRepository>,
        verifications: Arc<dyn VerificationRepository>,
        mailer: Arc<dyn Mailer>,
        code_length: usize,
        ttl_minutes: i64,
        resend_interval_secs: i64,
    ) -> Self {
        Self {
            users,
            verifications,
            mailer,
            code_length,
            ttl_minutes,
            resend_interval_secs,
        }
    }

    pub async fn handle(&self, cmd: SendCodeCommand) -> Result<SendCodeResult, VerificationError> {
        if self.users.find_by_email(&cmd.email).await?.is_some() {
            return Err(VerificationError::email_already_verified(&cmd.email));
        }

        if let Some(latest) = self.verifications.find_latest_by_email(&cmd.email).await? {
            let elapsed = Timestamp::now().duration_since(&latest.created_at).num_seconds();
            if elapsed < self.resend_interval_secs {
                let retry_after = (self.resend_interval_secs - elapsed).max(1) as u64;
                return Err(VerificationError::RateLimited {
                    retry_after_secs: retry_after,
                });
            }
        }

        let code = generate_code(self.code_length);
        let record = VerificationRecord::create(
            &cmd.email,
            &cmd.name,
            &cmd.surname,
            &code,
            self.ttl_minutes,
        );

        self.mailer
            .send_verification_code(&cmd.email, &cmd.name, &code)
            .await
            .map_err(|e| VerificationError::EmailDelivery(e.to_string()))?;

        self.verifications.insert(&record).await?;

        tracing::info!(verification_id = %record.id, "verification code issued");

        Ok(SendCodeResult {
            email: cmd.email,
            expires_in_secs: (self.ttl_minutes * 60) as u64,
        })
    }
}
