//! End-to-end payment flow over in-memory ports.
//!
//! Exercises the whole purchase path without external services:
//! 1. A verified user creates a payment intent for a tariff
//! 2. Stripe reports the outcome through a signed webhook
//! 3. The status transition is applied exactly once per event id
//! 4. A terminal success triggers one email with the tariff PDFs attached

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use hmac::{Hmac, Mac};
use sha2::Sha256;

use harmoni::application::payment::{
    CreateIntentCommand, CreateIntentHandler, HandleWebhookCommand, HandleWebhookHandler,
    HandleWebhookResult,
};
use harmoni::domain::foundation::{DomainError, FileId, PaymentId, TariffId, UserId};
use harmoni::domain::payment::{PaymentRecord, PaymentStatus, StripeWebhookVerifier};
use harmoni::domain::tariff::{Tariff, TariffFile};
use harmoni::domain::user::User;
use harmoni::ports::{
    CreateIntentRequest, EmailAttachment, FileStorage, GatewayError, Mailer, MailerError,
    PaymentGateway, PaymentIntent, PaymentRepository, SaveResult, StorageError,
    TariffFileRepository, TariffRepository, UserRepository, WebhookEventRecord,
    WebhookEventRepository,
};

const WEBHOOK_SECRET: &str = "whsec_integration_test_secret";

// =============================================================================
// Test Infrastructure
// =============================================================================

struct InMemoryUsers {
    users: Mutex<Vec<User>>,
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn insert(&self, user: &User) -> Result<SaveResult, DomainError> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == user.email) {
            return Ok(SaveResult::AlreadyExists);
        }
        users.push(user.clone());
        Ok(SaveResult::Inserted)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        Ok(self.users.lock().unwrap().iter().find(|u| u.id == *id).cloned())
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
        if let Some(existing) = users.iter_mut().find(|u| u.id == user.id) {
            *existing = user.clone();
        }
        Ok(())
    }

    async fn delete(&self, id: &UserId) -> Result<(), DomainError> {
        self.users.lock().unwrap().retain(|u| u.id != *id);
        Ok(())
    }
}

struct InMemoryTariffs {
    tariffs: Mutex<Vec<Tariff>>,
}

#[async_trait]
impl TariffRepository for InMemoryTariffs {
    async fn insert(&self, tariff: &Tariff) -> Result<SaveResult, DomainError> {
        self.tariffs.lock().unwrap().push(tariff.clone());
        Ok(SaveResult::Inserted)
    }

    async fn find_by_id(&self, id: &TariffId) -> Result<Option<Tariff>, DomainError> {
        Ok(self
            .tariffs
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.id == *id)
            .cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Tariff>, DomainError> {
        Ok(self
            .tariffs
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.name == name)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<Tariff>, DomainError> {
        Ok(self.tariffs.lock().unwrap().clone())
    }

    async fn list_with_calories(&self) -> Result<Vec<Tariff>, DomainError> {
        Ok(self
            .tariffs
            .lock()
            .unwrap()
            .iter()
            .filter(|t| t.calories.is_some())
            .cloned()
            .collect())
    }

    async fn update(&self, tariff: &Tariff) -> Result<(), DomainError> {
        let mut tariffs = self.tariffs.lock().unwrap();
        if let Some(existing) = tariffs.iter_mut().find(|t| t.id == tariff.id) {
            *existing = tariff.clone();
        }
        Ok(())
    }

    async fn delete(&self, id: &TariffId) -> Result<(), DomainError> {
        self.tariffs.lock().unwrap().retain(|t| t.id != *id);
        Ok(())
    }
}

struct InMemoryTariffFiles {
    files: Mutex<Vec<TariffFile>>,
}

#[async_trait]
impl TariffFileRepository for InMemoryTariffFiles {
    async fn insert(&self, file: &TariffFile) -> Result<(), DomainError> {
        self.files.lock().unwrap().push(file.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &FileId) -> Result<Option<TariffFile>, DomainError> {
        Ok(self.files.lock().unwrap().iter().find(|f| f.id == *id).cloned())
    }

    async fn list_by_tariff(&self, tariff_id: &TariffId) -> Result<Vec<TariffFile>, DomainError> {
        Ok(self
            .files
            .lock()
            .unwrap()
            .iter()
            .filter(|f| f.tariff_id == *tariff_id)
            .cloned()
            .collect())
    }

    async fn delete(&self, id: &FileId) -> Result<(), DomainError> {
        self.files.lock().unwrap().retain(|f| f.id != *id);
        Ok(())
    }
}

struct InMemoryPayments {
    payments: Mutex<Vec<PaymentRecord>>,
}

#[async_trait]
impl PaymentRepository for InMemoryPayments {
    async fn insert(&self, payment: &PaymentRecord) -> Result<(), DomainError> {
        self.payments.lock().unwrap().push(payment.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &PaymentId) -> Result<Option<PaymentRecord>, DomainError> {
        Ok(self
            .payments
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == *id)
            .cloned())
    }

    async fn find_by_intent_id(
        &self,
        intent_id: &str,
    ) -> Result<Option<PaymentRecord>, DomainError> {
        Ok(self
            .payments
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.stripe_payment_intent_id == intent_id)
            .cloned())
    }

    async fn update(&self, payment: &PaymentRecord) -> Result<(), DomainError> {
        let mut payments = self.payments.lock().unwrap();
        if let Some(existing) = payments.iter_mut().find(|p| p.id == payment.id) {
            *existing = payment.clone();
        }
        Ok(())
    }
}

struct InMemoryWebhookEvents {
    event_ids: Mutex<Vec<WebhookEventRecord>>,
}

#[async_trait]
impl WebhookEventRepository for InMemoryWebhookEvents {
    async fn insert_if_absent(
        &self,
        record: WebhookEventRecord,
    ) -> Result<SaveResult, DomainError> {
        let mut events = self.event_ids.lock().unwrap();
        if events.iter().any(|e| e.event_id == record.event_id) {
            return Ok(SaveResult::AlreadyExists);
        }
        events.push(record);
        Ok(SaveResult::Inserted)
    }

    async fn delete_before(
        &self,
        cutoff: harmoni::domain::foundation::Timestamp,
    ) -> Result<u64, DomainError> {
        let mut events = self.event_ids.lock().unwrap();
        let before = events.len();
        events.retain(|e| !e.processed_at.is_before(&cutoff));
        Ok((before - events.len()) as u64)
    }
}

struct InMemoryStorage {
    files: Mutex<HashMap<String, Vec<u8>>>,
}

#[async_trait]
impl FileStorage for InMemoryStorage {
    async fn write(&self, relative_path: &str, content: &[u8]) -> Result<(), StorageError> {
        self.files
            .lock()
            .unwrap()
            .insert(relative_path.to_string(), content.to_vec());
        Ok(())
    }

    async fn read(&self, relative_path: &str) -> Result<Vec<u8>, StorageError> {
        self.files
            .lock()
            .unwrap()
            .get(relative_path)
            .cloned()
            .ok_or_else(|| StorageError::new(relative_path, "not found"))
    }

    async fn delete(&self, relative_path: &str) -> Result<(), StorageError> {
        self.files.lock().unwrap().remove(relative_path);
        Ok(())
    }
}

/// Records sent mail instead of delivering it.
#[derive(Default)]
struct RecordingMailer {
    success_notices: Mutex<Vec<(String, String, Vec<String>)>>,
    failure_notices: Mutex<Vec<(String, String)>>,
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send_verification_code(
        &self,
        _to_email: &str,
        _name: &str,
        _code: &str,
    ) -> Result<(), MailerError> {
        Ok(())
    }

    async fn send_payment_success(
        &self,
        to_email: &str,
        _name: &str,
        tariff_name: &str,
        _amount: i64,
        _currency: &str,
        attachments: Vec<EmailAttachment>,
    ) -> Result<(), MailerError> {
        let filenames = attachments.into_iter().map(|a| a.filename).collect();
        self.success_notices.lock().unwrap().push((
            to_email.to_string(),
            tariff_name.to_string(),
            filenames,
        ));
        Ok(())
    }

    async fn send_payment_failure(
        &self,
        to_email: &str,
        _name: &str,
        _tariff_name: &str,
        reason: &str,
    ) -> Result<(), MailerError> {
        self.failure_notices
            .lock()
            .unwrap()
            .push((to_email.to_string(), reason.to_string()));
        Ok(())
    }
}

/// Gateway that mints deterministic intent ids.
struct FakeGateway;

#[async_trait]
impl PaymentGateway for FakeGateway {
    async fn create_payment_intent(
        &self,
        request: CreateIntentRequest,
    ) -> Result<PaymentIntent, GatewayError> {
        Ok(PaymentIntent {
            id: format!("pi_fake_{}", request.amount),
            client_secret: format!("pi_fake_{}_secret", request.amount),
        })
    }
}

// =============================================================================
// Fixture
// =============================================================================

struct Fixture {
    users: Arc<InMemoryUsers>,
    tariffs: Arc<InMemoryTariffs>,
    tariff_files: Arc<InMemoryTariffFiles>,
    payments: Arc<InMemoryPayments>,
    events: Arc<InMemoryWebhookEvents>,
    storage: Arc<InMemoryStorage>,
    mailer: Arc<RecordingMailer>,
}

impl Fixture {
    fn new() -> Self {
        Self {
            users: Arc::new(InMemoryUsers {
                users: Mutex::new(Vec::new()),
            }),
            tariffs: Arc::new(InMemoryTariffs {
                tariffs: Mutex::new(Vec::new()),
            }),
            tariff_files: Arc::new(InMemoryTariffFiles {
                files: Mutex::new(Vec::new()),
            }),
            payments: Arc::new(InMemoryPayments {
                payments: Mutex::new(Vec::new()),
            }),
            events: Arc::new(InMemoryWebhookEvents {
                event_ids: Mutex::new(Vec::new()),
            }),
            storage: Arc::new(InMemoryStorage {
                files: Mutex::new(HashMap::new()),
            }),
            mailer: Arc::new(RecordingMailer::default()),
        }
    }

    fn create_intent_handler(&self) -> CreateIntentHandler {
        CreateIntentHandler::new(
            self.users.clone(),
            self.tariffs.clone(),
            self.payments.clone(),
            Arc::new(FakeGateway),
            "usd",
        )
    }

    fn webhook_handler(&self) -> HandleWebhookHandler {
        HandleWebhookHandler::new(
            StripeWebhookVerifier::new(WEBHOOK_SECRET),
            self.events.clone(),
            self.payments.clone(),
            self.tariff_files.clone(),
            self.storage.clone(),
            self.mailer.clone(),
        )
    }
}

async fn seed_verified_user(fx: &Fixture, email: &str) -> User {
    let user = User::register_verified("Dana", "Reyes", email);
    fx.users.insert(&user).await.unwrap();
    user
}

async fn seed_tariff_with_pdfs(fx: &Fixture) -> Tariff {
    let tariff = Tariff::create(
        "Balance",
        2990,
        Some("Balanced weekly plan".to_string()),
        Some(2200),
        vec!["meal plans".to_string(), "shopping lists".to_string()],
    );
    fx.tariffs.insert(&tariff).await.unwrap();

    for (idx, name) in ["week-1.pdf", "week-2.pdf"].iter().enumerate() {
        let path = format!("tariffs/{}/{idx}.pdf", tariff.id);
        fx.storage.write(&path, b"%PDF-1.7 pages").await.unwrap();
        let file = TariffFile::create(tariff.id, *name, path.as_str(), 14);
        fx.tariff_files.insert(&file).await.unwrap();
    }

    tariff
}

/// Builds a signed webhook command the verifier will accept.
fn signed_webhook(event_id: &str, event_type: &str, intent_id: &str) -> HandleWebhookCommand {
    let payload = serde_json::json!({
        "id": event_id,
        "type": event_type,
        "created": chrono::Utc::now().timestamp(),
        "data": { "object": { "id": intent_id } },
        "livemode": false
    })
    .to_string()
    .into_bytes();

    let timestamp = chrono::Utc::now().timestamp();
    let signed_payload = format!("{timestamp}.{}", String::from_utf8_lossy(&payload));
    let mut mac = Hmac::<Sha256>::new_from_slice(WEBHOOK_SECRET.as_bytes()).unwrap();
    mac.update(signed_payload.as_bytes());
    let signature = hex::encode(mac.finalize().into_bytes());

    HandleWebhookCommand {
        payload,
        signature_header: format!("t={timestamp},v1={signature}"),
    }
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn successful_purchase_sends_one_email_with_attachments() {
    let fx = Fixture::new();
    seed_verified_user(&fx, "dana@example.com").await;
    let tariff = seed_tariff_with_pdfs(&fx).await;

    let intent = fx
        .create_intent_handler()
        .handle(CreateIntentCommand {
            email: "dana@example.com".to_string(),
            tariff_id: tariff.id,
        })
        .await
        .unwrap();
    assert_eq!(intent.amount, 2990);

    let payment = fx
        .payments
        .find_by_id(&intent.payment_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(payment.status, PaymentStatus::RequiresPaymentMethod);

    let result = fx
        .webhook_handler()
        .handle(signed_webhook(
            "evt_1",
            "payment_intent.succeeded",
            &payment.stripe_payment_intent_id,
        ))
        .await
        .unwrap();
    assert!(matches!(result, HandleWebhookResult::Processed { .. }));

    let payment = fx
        .payments
        .find_by_id(&intent.payment_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(payment.status, PaymentStatus::Succeeded);

    let notices = fx.mailer.success_notices.lock().unwrap();
    assert_eq!(notices.len(), 1);
    let (to, tariff_name, attachments) = &notices[0];
    assert_eq!(to, "dana@example.com");
    assert_eq!(tariff_name, "Balance");
    assert_eq!(attachments.len(), 2);
    assert!(attachments.contains(&"week-1.pdf".to_string()));
}

#[tokio::test]
async fn redelivered_event_is_acked_without_a_second_email() {
    let fx = Fixture::new();
    seed_verified_user(&fx, "dana@example.com").await;
    let tariff = seed_tariff_with_pdfs(&fx).await;

    let intent = fx
        .create_intent_handler()
        .handle(CreateIntentCommand {
            email: "dana@example.com".to_string(),
            tariff_id: tariff.id,
        })
        .await
        .unwrap();
    let payment = fx
        .payments
        .find_by_id(&intent.payment_id)
        .await
        .unwrap()
        .unwrap();

    let handler = fx.webhook_handler();
    let first = handler
        .handle(signed_webhook(
            "evt_1",
            "payment_intent.succeeded",
            &payment.stripe_payment_intent_id,
        ))
        .await
        .unwrap();
    let second = handler
        .handle(signed_webhook(
            "evt_1",
            "payment_intent.succeeded",
            &payment.stripe_payment_intent_id,
        ))
        .await
        .unwrap();

    assert!(matches!(first, HandleWebhookResult::Processed { .. }));
    assert_eq!(second, HandleWebhookResult::Duplicate);
    assert_eq!(fx.mailer.success_notices.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn failed_payment_sends_failure_notice_without_attachments() {
    let fx = Fixture::new();
    seed_verified_user(&fx, "dana@example.com").await;
    let tariff = seed_tariff_with_pdfs(&fx).await;

    let intent = fx
        .create_intent_handler()
        .handle(CreateIntentCommand {
            email: "dana@example.com".to_string(),
            tariff_id: tariff.id,
        })
        .await
        .unwrap();
    let payment = fx
        .payments
        .find_by_id(&intent.payment_id)
        .await
        .unwrap()
        .unwrap();

    fx.webhook_handler()
        .handle(signed_webhook(
            "evt_1",
            "payment_intent.payment_failed",
            &payment.stripe_payment_intent_id,
        ))
        .await
        .unwrap();

    assert!(fx.mailer.success_notices.lock().unwrap().is_empty());
    let failures = fx.mailer.failure_notices.lock().unwrap();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].0, "dana@example.com");
}

#[tokio::test]
async fn tampered_webhook_changes_nothing() {
    let fx = Fixture::new();
    seed_verified_user(&fx, "dana@example.com").await;
    let tariff = seed_tariff_with_pdfs(&fx).await;

    let intent = fx
        .create_intent_handler()
        .handle(CreateIntentCommand {
            email: "dana@example.com".to_string(),
            tariff_id: tariff.id,
        })
        .await
        .unwrap();
    let payment = fx
        .payments
        .find_by_id(&intent.payment_id)
        .await
        .unwrap()
        .unwrap();

    let mut cmd = signed_webhook(
        "evt_1",
        "payment_intent.succeeded",
        &payment.stripe_payment_intent_id,
    );
    // Flip one byte of the payload after signing.
    cmd.payload[10] ^= 0x01;

    let result = fx.webhook_handler().handle(cmd).await;
    assert!(result.is_err());

    let payment = fx
        .payments
        .find_by_id(&intent.payment_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(payment.status, PaymentStatus::RequiresPaymentMethod);
    assert!(fx.events.event_ids.lock().unwrap().is_empty());
    assert!(fx.mailer.success_notices.lock().unwrap().is_empty());
}

#[tokio::test]
async fn unverified_email_cannot_create_an_intent() {
    let fx = Fixture::new();
    let tariff = seed_tariff_with_pdfs(&fx).await;

    let result = fx
        .create_intent_handler()
        .handle(CreateIntentCommand {
            email: "stranger@example.com".to_string(),
            tariff_id: tariff.id,
        })
        .await;

    assert!(result.is_err());
    assert!(fx.payments.payments.lock().unwrap().is_empty());
}
