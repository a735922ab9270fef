//! Harmoni server binary.
//!
//! Loads configuration, connects to Postgres, wires the adapters into
//! the HTTP router, seeds the configured admin account, and runs the
//! background cleanup task alongside the server.

use std::sync::Arc;
use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::EnvFilter;

use harmoni::adapters::http::{app_router, AppState};
use harmoni::adapters::postgres::{
    PostgresAdminRepository, PostgresPaymentRepository, PostgresTariffFileRepository,
    PostgresTariffRepository, PostgresUserRepository, PostgresVerificationRepository,
    PostgresWebhookEventRepository,
};
use harmoni::adapters::resend::ResendMailer;
use harmoni::adapters::storage::LocalFileStorage;
use harmoni::adapters::stripe::{StripeConfig, StripeGateway};
use harmoni::application::cleanup::CleanupTask;
use harmoni::config::AppConfig;
use harmoni::domain::admin::{hash_password, Admin};
use harmoni::ports::AdminRepository;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(config.server.log_level.clone()))
        .init();

    tracing::info!(
        environment = ?config.server.environment,
        "starting harmoni backend"
    );

    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(Duration::from_secs(config.database.acquire_timeout_secs))
        .connect(&config.database.url)
        .await?;

    if config.database.run_migrations {
        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::info!("database migrations applied");
    }

    let users = Arc::new(PostgresUserRepository::new(pool.clone()));
    let verifications = Arc::new(PostgresVerificationRepository::new(pool.clone()));
    let tariffs = Arc::new(PostgresTariffRepository::new(pool.clone()));
    let tariff_files = Arc::new(PostgresTariffFileRepository::new(pool.clone()));
    let payments = Arc::new(PostgresPaymentRepository::new(pool.clone()));
    let webhook_events = Arc::new(PostgresWebhookEventRepository::new(pool.clone()));
    let admins = Arc::new(PostgresAdminRepository::new(pool.clone()));

    let gateway = Arc::new(StripeGateway::new(StripeConfig::new(
        config.payment.stripe_api_key.clone(),
    )));
    let mailer = Arc::new(ResendMailer::new(config.email.clone()));
    let storage = Arc::new(LocalFileStorage::new(config.storage.upload_dir.clone()));

    seed_admin(&config, admins.as_ref()).await?;

    let cleanup = CleanupTask::new(
        verifications.clone(),
        webhook_events.clone(),
        Duration::from_secs(config.server.cleanup_interval_secs),
    );
    tokio::spawn(cleanup.run());

    let addr = config.server.socket_addr()?;
    let state = AppState {
        users,
        verifications,
        tariffs,
        tariff_files,
        payments,
        webhook_events,
        admins,
        gateway,
        mailer,
        storage,
        config: Arc::new(config),
    };

    let app = app_router(state);

    tracing::info!(%addr, "listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Creates the configured admin account if it does not exist yet.
async fn seed_admin(
    config: &AppConfig,
    admins: &dyn AdminRepository,
) -> Result<(), Box<dyn std::error::Error>> {
    let (Some(email), Some(password)) = (
        config.auth.seed_admin_email.as_deref(),
        config.auth.seed_admin_password.as_deref(),
    ) else {
        return Ok(());
    };

    if admins.find_by_email(email).await?.is_some() {
        return Ok(());
    }

    let admin = Admin::create(email, hash_password(password)?);
    admins.insert(&admin).await?;
    tracing::info!(%email, "seeded admin account");

    Ok(())
}
