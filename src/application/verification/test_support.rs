//! In-memory port implementations shared by verification handler tests.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, Timestamp, UserId};
use crate::domain::user::User;
use crate::domain::verification::VerificationRecord;
use crate::ports::{
    EmailAttachment, Mailer, MailerError, SaveResult, UserRepository, VerificationRepository,
};

pub struct MockUserRepository {
    users: Mutex<Vec<User>>,
}

impl MockUserRepository {
    pub fn empty() -> Self {
        Self {
            users: Mutex::new(Vec::new()),
        }
    }

    pub fn with(user: User) -> Self {
        Self {
            users: Mutex::new(vec![user]),
        }
    }

    pub fn stored(&self) -> Vec<User> {
        self.users.lock().unwrap().clone()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn insert(&self, user: &User) -> Result<SaveResult, DomainError> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == user.email) {
            return Ok(SaveResult::AlreadyExists);
        }
        users.push(user.clone());
        Ok(SaveResult::Inserted)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        Ok(self.users.lock().unwrap().iter().find(|u| &u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<User>, DomainError> {
        Ok(self.users.lock().unwrap().clone())
    }

    async fn update(&self, user: &User) -> Result<(), DomainError> {
        let mut users = self.users.lock().unwrap();
        if let Some(u) = users.iter_mut().find(|u| u.id == user.id) {
            *u = user.clone();
        }
        Ok(())
    }

    async fn delete(&self, id: &UserId) -> Result<(), DomainError> {
        self.users.lock().unwrap().retain(|u| &u.id != id);
        Ok(())
    }
}

pub struct MockVerificationRepository {
    records: Mutex<Vec<VerificationRecord>>,
}

impl MockVerificationRepository {
    pub fn empty() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
        }
    }

    pub fn with(record: VerificationRecord) -> Self {
        Self {
            records: Mutex::new(vec![record]),
        }
    }

    pub fn stored(&self) -> Vec<VerificationRecord> {
        self.records.lock().unwrap().clone()
    }
}

#[async_trait]
impl VerificationRepository for MockVerificationRepository {
    async fn insert(&self, record: &VerificationRecord) -> Result<(), DomainError> {
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }

    async fn find_latest_by_email(
        &self,
        email: &str,
    ) -> Result<Option<VerificationRecord>, DomainError> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.email == email)
            .max_by_key(|r| r.created_at)
            .cloned())
    }

    async fn find_latest_unverified_by_email(
        &self,
        email: &str,
    ) -> Result<Option<VerificationRecord>, DomainError> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.email == email && r.verified_at.is_none())
            .max_by_key(|r| r.created_at)
            .cloned())
    }

    async fn update(&self, record: &VerificationRecord) -> Result<(), DomainError> {
        let mut records = self.records.lock().unwrap();
        if let Some(r) = records.iter_mut().find(|r| r.id == record.id) {
            *r = record.clone();
        }
        Ok(())
    }

    async fn delete_expired_before(&self, cutoff: Timestamp) -> Result<u64, DomainError> {
        let mut records = self.records.lock().unwrap();
        let before = records.len();
        records.retain(|r| r.verified_at.is_some() || !cutoff.is_after(&r.expires_at));
        Ok((before - records.len()) as u64)
    }
}

pub struct MockMailer {
    fail: bool,
    codes: Mutex<Vec<String>>,
}

impl MockMailer {
    pub fn new() -> Self {
        Self {
            fail: false,
            codes: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            codes: Mutex::new(Vec::new()),
        }
    }

    pub fn verification_codes_sent(&self) -> Vec<String> {
        self.codes.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for MockMailer {
    async fn send_verification_code(
        &self,
        _to_email: &str,
        _name: &str,
        code: &str,
    ) -> Result<(), MailerError> {
        if self.fail {
            return Err(MailerError::new("provider unavailable"));
        }
        self.codes.lock().unwrap().push(code.to_string());
        Ok(())
    }

    async fn send_payment_success(
        &self,
        _to_email: &str,
        _name: &str,
        _tariff_name: &str,
        _amount: i64,
        _currency: &str,
        _attachments: Vec<EmailAttachment>,
    ) -> Result<(), MailerError> {
        Ok(())
    }

    async fn send_payment_failure(
        &self,
        _to_email: &str,
        _name: &str,
        _tariff_name: &str,
        _reason: &str,
    ) -> Result<(), MailerError> {
        Ok(())
    }
}
