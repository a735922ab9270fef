//! Shared application state for the HTTP layer.
//!
//! Holds Arc-wrapped ports plus the configuration slices handlers need.
//! Cloned per request; application handlers are constructed on demand
//! from the shared ports.

use std::sync::Arc;

use secrecy::SecretString;

use crate::application::admin::LoginHandler;
use crate::application::calculator::CalculateHandler;
use crate::application::payment::{CreateIntentHandler, GetStatusHandler, HandleWebhookHandler};
use crate::application::tariff::{
    CreateTariffHandler, DeleteFileHandler, DeleteTariffHandler, DownloadFileHandler,
    GetTariffHandler, ListFilesHandler, ListTariffsHandler, UpdateTariffHandler,
    UploadFileHandler,
};
use crate::application::user::{
    DeleteUserHandler, GetUserHandler, ListUsersHandler, UpdateUserHandler,
};
use crate::application::verification::{SendCodeHandler, VerifyCodeHandler};
use crate::config::AppConfig;
use crate::domain::calculator::GoalAdjustment;
use crate::domain::payment::StripeWebhookVerifier;
use crate::ports::{
    AdminRepository, FileStorage, Mailer, PaymentGateway, PaymentRepository,
    TariffFileRepository, TariffRepository, UserRepository, VerificationRepository,
    WebhookEventRepository,
};

#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub verifications: Arc<dyn VerificationRepository>,
    pub tariffs: Arc<dyn TariffRepository>,
    pub tariff_files: Arc<dyn TariffFileRepository>,
    pub payments: Arc<dyn PaymentRepository>,
    pub webhook_events: Arc<dyn WebhookEventRepository>,
    pub admins: Arc<dyn AdminRepository>,
    pub gateway: Arc<dyn PaymentGateway>,
    pub mailer: Arc<dyn Mailer>,
    pub storage: Arc<dyn FileStorage>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn send_code_handler(&self) -> SendCodeHandler {
        SendCodeHandler::new(
            self.users.clone(),
            self.verifications.clone(),
            self.mailer.clone(),
            self.config.verification.code_length,
            self.config.verification.ttl_minutes,
            self.config.verification.resend_interval_secs,
        )
    }

    pub fn verify_code_handler(&self) -> VerifyCodeHandler {
        VerifyCodeHandler::new(
            self.users.clone(),
            self.verifications.clone(),
            self.config.verification.max_attempts,
        )
    }

    pub fn login_handler(&self) -> LoginHandler {
        LoginHandler::new(
            self.admins.clone(),
            SecretString::new(self.config.auth.jwt_secret.clone()),
            self.config.auth.token_expiry_secs,
        )
    }

    pub fn get_user_handler(&self) -> GetUserHandler {
        GetUserHandler::new(self.users.clone())
    }

    pub fn list_users_handler(&self) -> ListUsersHandler {
        ListUsersHandler::new(self.users.clone())
    }

    pub fn update_user_handler(&self) -> UpdateUserHandler {
        UpdateUserHandler::new(self.users.clone())
    }

    pub fn delete_user_handler(&self) -> DeleteUserHandler {
        DeleteUserHandler::new(self.users.clone())
    }

    pub fn create_tariff_handler(&self) -> CreateTariffHandler {
        CreateTariffHandler::new(self.tariffs.clone())
    }

    pub fn update_tariff_handler(&self) -> UpdateTariffHandler {
        UpdateTariffHandler::new(self.tariffs.clone())
    }

    pub fn delete_tariff_handler(&self) -> DeleteTariffHandler {
        DeleteTariffHandler::new(
            self.tariffs.clone(),
            self.tariff_files.clone(),
            self.storage.clone(),
        )
    }

    pub fn get_tariff_handler(&self) -> GetTariffHandler {
        GetTariffHandler::new(self.tariffs.clone())
    }

    pub fn list_tariffs_handler(&self) -> ListTariffsHandler {
        ListTariffsHandler::new(self.tariffs.clone())
    }

    pub fn upload_file_handler(&self) -> UploadFileHandler {
        UploadFileHandler::new(
            self.tariffs.clone(),
            self.tariff_files.clone(),
            self.storage.clone(),
            self.config.storage.max_file_size_bytes,
        )
    }

    pub fn list_files_handler(&self) -> ListFilesHandler {
        ListFilesHandler::new(self.tariffs.clone(), self.tariff_files.clone())
    }

    pub fn download_file_handler(&self) -> DownloadFileHandler {
        DownloadFileHandler::new(self.tariff_files.clone(), self.storage.clone())
    }

    pub fn delete_file_handler(&self) -> DeleteFileHandler {
        DeleteFileHandler::new(self.tariff_files.clone(), self.storage.clone())
    }

    pub fn create_intent_handler(&self) -> CreateIntentHandler {
        CreateIntentHandler::new(
            self.users.clone(),
            self.tariffs.clone(),
            self.payments.clone(),
            self.gateway.clone(),
            self.config.payment.currency.clone(),
        )
    }

    pub fn get_status_handler(&self) -> GetStatusHandler {
        GetStatusHandler::new(self.payments.clone())
    }

    pub fn webhook_handler(&self) -> HandleWebhookHandler {
        HandleWebhookHandler::new(
            StripeWebhookVerifier::new(self.config.payment.stripe_webhook_secret.as_str()),
            self.webhook_events.clone(),
            self.payments.clone(),
            self.tariff_files.clone(),
            self.storage.clone(),
            self.mailer.clone(),
        )
    }

    pub fn calculate_handler(&self) -> CalculateHandler {
        CalculateHandler::new(self.tariffs.clone(), GoalAdjustment::default())
    }
}
