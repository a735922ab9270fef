//! VerifyCodeHandler - checks a submitted code and registers the user.

use std::sync::Arc;

use crate::domain::foundation::{Timestamp, UserId};
use crate::domain::user::User;
use crate::domain::verification::{AttemptOutcome, VerificationError};
use crate::ports::{SaveResult, UserRepository, VerificationRepository};

#[derive(Debug, Clone)]
pub struct VerifyCodeCommand {
    pub email: String,
    pub code: String,
}

#[derive(Debug, Clone)]
pub struct VerifyCodeResult {
    pub user_id: UserId,
    pub name: String,
    pub surname: String,
    pub email: String,
}

/// Handler for code verification.
///
/// The user row is created here, at the first successful verification,
/// from the name and surname stashed on the verification record. The
/// email uniqueness constraint in the user store settles concurrent
/// verifications of the same email.
pub struct VerifyCodeHandler {
    users: Arc<dyn UserRepository>,
    verifications: Arc<dyn VerificationRepository>,
    max_attempts: u32,
}

impl VerifyCodeHandler {
    pub fn new(
        users: Arc<dyn UserRepository>,
        verifications: Arc<dyn VerificationRepository>,
        max_attempts: u32,
    ) -> Self {
        Self {
            users,
            verifications,
            max_attempts,
        }
    }

    pub async fn handle(
        &self,
        cmd: VerifyCodeCommand,
    ) -> Result<VerifyCodeResult, VerificationError> {
        if self.users.find_by_email(&cmd.email).await?.is_some() {
            return Err(VerificationError::email_already_verified(&cmd.email));
        }

        let Some(mut record) = self
            .verifications
            .find_latest_unverified_by_email(&cmd.email)
            .await?
        else {
            return Err(VerificationError::InvalidCode);
        };

        let outcome = record.register_attempt(&cmd.code, Timestamp::now(), self.max_attempts);
        match outcome {
            AttemptOutcome::Expired => Err(VerificationError::CodeExpired),
            AttemptOutcome::MaxAttemptsExceeded => Err(VerificationError::MaxAttemptsExceeded),
            AttemptOutcome::WrongCode => {
                self.verifications.update(&record).await?;
                Err(VerificationError::InvalidCode)
            }
            AttemptOutcome::Verified => {
                self.verifications.update(&record).await?;

                let user = User::register_verified(&record.name, &record.surname, &record.email);
                match self.users.insert(&user).await? {
                    SaveResult::Inserted => {
                        tracing::info!(user_id = %user.id, "user registered via verification");
                        Ok(VerifyCodeResult {
                            user_id: user.id,
                            name: user.name,
                            surname: user.surname,
                            email: user.email,
                        })
                    }
                    SaveResult::AlreadyExists => {
                        Err(VerificationError::email_already_registered(&cmd.email))
                    }
                }
            }
        }
    }
}
