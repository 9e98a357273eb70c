//! Embedded schema migrations, applied at startup.

use sqlx::PgPool;
use tracing::info;

use daylog_core::error::{AppError, ErrorKind};
use daylog_core::result::AppResult;

/// Applies any pending migrations from the workspace `migrations/` tree.
///
/// The migrator takes an advisory lock, so concurrent starts (and the
/// integration tests, which all run this) serialize safely.
pub async fn run_migrations(pool: &PgPool) -> AppResult<()> {
    let migrator = sqlx::migrate!("../../migrations");
    let count = migrator.iter().count();

    migrator
        .run(pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Migration run failed", e))?;

    info!(migrations = count, "Schema is up to date");
    Ok(())
}
