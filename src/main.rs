//! CrewDesk Notify — notification distribution engine.
//!
//! Main entry point that wires the crates together: database pool,
//! repositories, event bus, dispatcher, real-time publisher, and the
//! sweep scheduler.

use std::sync::Arc;

use tracing;
use tracing_subscriber::{fmt, EnvFilter};

use crewdesk_core::config::AppConfig;
use crewdesk_core::error::AppError;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from file and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("CREWDESK_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting CrewDesk Notify v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database connection + migrations ─────────────────
    let db = crewdesk_database::connection::DatabasePool::connect(&config.database).await?;

    tracing::info!("Running database migrations...");
    crewdesk_database::migration::run_migrations(db.pool()).await?;
    tracing::info!("Database migrations complete");

    // ── Step 2: Repositories ─────────────────────────────────────
    let notification_repo =
        crewdesk_database::repositories::notification::NotificationRepository::new(
            db.pool().clone(),
        );
    let team_repo = crewdesk_database::repositories::team::TeamRepository::new(db.pool().clone());
    let user_repo = crewdesk_database::repositories::user::UserRepository::new(db.pool().clone());

    // ── Step 3: Real-time publisher ──────────────────────────────
    let realtime = Arc::new(crewdesk_realtime::publisher::RealtimePublisher::new(
        &config.realtime,
    ));
    tracing::info!("Real-time publisher initialized");

    // ── Step 4: Strategies and notification service ──────────────
    let registry = Arc::new(crewdesk_service::strategy::registry::StrategyRegistry::with_defaults());
    let notification_service = Arc::new(crewdesk_service::notification::NotificationService::new(
        notification_repo.clone(),
        Arc::clone(&registry),
        Arc::clone(&realtime),
        config.notifications.clone(),
    ));

    // ── Step 5: Event bus + dispatcher ───────────────────────────
    let bus = Arc::new(crewdesk_service::EventBus::new());
    let dispatcher = Arc::new(crewdesk_service::dispatch::NotificationDispatcher::new(
        Arc::clone(&notification_service),
        team_repo.clone(),
        user_repo,
        Arc::clone(&realtime),
    ));
    bus.subscribe(dispatcher);
    tracing::info!("Event bus wired");

    let event_service = Arc::new(crewdesk_service::events::TeamEventService::new(
        Arc::clone(&bus),
        team_repo,
        config.notifications.clone(),
    ));

    // ── Step 6: Sweep scheduler ──────────────────────────────────
    let mut scheduler = if config.scheduler.enabled {
        let scheduler = crewdesk_worker::SweepScheduler::new(
            Arc::clone(&event_service),
            notification_repo,
            config.scheduler.clone(),
            config.notifications.clone(),
        )
        .await?;
        scheduler.register_sweeps().await?;
        scheduler.start().await?;
        Some(scheduler)
    } else {
        tracing::info!("Sweep scheduler disabled");
        None
    };

    tracing::info!("CrewDesk Notify running");

    // ── Step 7: Graceful shutdown ────────────────────────────────
    shutdown_signal().await;
    tracing::info!("Shutdown signal received, starting graceful shutdown...");

    if let Some(scheduler) = scheduler.as_mut() {
        scheduler.shutdown().await?;
    }
    db.close().await;

    tracing::info!("CrewDesk Notify shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
