//! Daylog server binary.
//!
//! Wires configuration, the database pool, auth, services, the HTTP
//! router, and the blacklist sweeper together, then serves until
//! Ctrl+C or SIGTERM.

use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use daylog_api::{AppState, build_router};
use daylog_auth::authenticator::Authenticator;
use daylog_auth::jwt::decoder::TokenDecoder;
use daylog_auth::jwt::encoder::TokenEncoder;
use daylog_auth::password::hasher::PasswordHasher;
use daylog_auth::password::policy::PasswordPolicy;
use daylog_auth::revocation::TokenRevoker;
use daylog_core::config::AppConfig;
use daylog_core::error::AppError;
use daylog_database::repositories::activity::ActivityRepository;
use daylog_database::repositories::blacklist::BlacklistRepository;
use daylog_database::repositories::user::UserRepository;
use daylog_database::{DatabasePool, migration};
use daylog_service::activity::ActivityService;
use daylog_service::user::UserService;
use daylog_worker::{BlacklistSweeper, SweepScheduler};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Fatal: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    let env = std::env::var("DAYLOG_ENV").unwrap_or_else(|_| "development".to_string());
    let config = Arc::new(AppConfig::load(&env)?);
    init_logging(&config);
    info!(environment = %env, "Starting daylog-server");

    let db = DatabasePool::connect(&config.database).await?;
    migration::run_migrations(db.pool()).await?;

    // Repositories
    let user_repo = Arc::new(UserRepository::new(db.pool().clone()));
    let blacklist_repo = Arc::new(BlacklistRepository::new(db.pool().clone()));
    let activity_repo = Arc::new(ActivityRepository::new(db.pool().clone()));

    // Auth
    let hasher = Arc::new(PasswordHasher::new());
    let token_encoder = Arc::new(TokenEncoder::new(&config.auth));
    let token_decoder = Arc::new(TokenDecoder::new(&config.auth));
    let authenticator = Arc::new(Authenticator::new(
        user_repo.clone(),
        hasher.clone(),
        token_encoder.clone(),
        config.auth.enforce_active_account,
    ));
    let token_revoker = Arc::new(TokenRevoker::new(
        token_decoder.clone(),
        blacklist_repo.clone(),
    ));

    // Services
    let policy = PasswordPolicy::new(&config.auth);
    let user_service = Arc::new(UserService::new(user_repo.clone(), hasher, policy));
    let activity_service = Arc::new(ActivityService::new(activity_repo));

    // Blacklist sweeper: one pass at startup, then on the cron schedule.
    let sweeper = Arc::new(BlacklistSweeper::new(blacklist_repo.clone()));
    sweeper.run_logged().await;
    let mut scheduler = if config.worker.enabled {
        Some(SweepScheduler::start(sweeper, &config.worker.sweep_schedule).await?)
    } else {
        info!("Background worker disabled");
        None
    };

    let state = AppState {
        config: config.clone(),
        db: db.clone(),
        token_encoder,
        token_decoder,
        authenticator,
        token_revoker,
        user_repo,
        blacklist_repo,
        user_service,
        activity_service,
    };
    let app = build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;
    info!(%addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    if let Some(scheduler) = scheduler.as_mut() {
        if let Err(e) = scheduler.shutdown().await {
            error!(error = %e, "Scheduler shutdown failed");
        }
    }
    db.close().await;
    info!("Shutdown complete");
    Ok(())
}

/// Initializes the tracing subscriber from the logging config.
///
/// `RUST_LOG` takes precedence over the configured level when set.
fn init_logging(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if config.logging.format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Resolves when the process receives Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}
