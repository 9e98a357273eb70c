//! Token blacklist repository implementation.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use daylog_core::error::{AppError, ErrorKind};
use daylog_core::result::AppResult;
use daylog_entity::blacklist::BlacklistedToken;

/// Repository for the token blacklist.
///
/// The blacklist is consulted on the request hot path, so every
/// operation here is a single short statement against the primary key.
#[derive(Debug, Clone)]
pub struct BlacklistRepository {
    pool: PgPool,
}

impl BlacklistRepository {
    /// Create a new blacklist repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a revoked token with the expiry copied from its own claim.
    ///
    /// A duplicate insert surfaces as a conflict; callers that treat
    /// double revocation as benign can match on the kind.
    pub async fn insert(&self, token: &str, expiration_date: DateTime<Utc>) -> AppResult<()> {
        sqlx::query("INSERT INTO token_blacklist (token, expiration_date) VALUES ($1, $2)")
            .bind(token)
            .bind(expiration_date)
            .execute(&self.pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(ref db_err)
                    if db_err.constraint() == Some("token_blacklist_pkey") =>
                {
                    AppError::conflict("Token is already blacklisted")
                }
                _ => AppError::with_source(ErrorKind::Database, "Failed to blacklist token", e),
            })?;
        Ok(())
    }

    /// Whether the given token string has been blacklisted.
    pub async fn contains(&self, token: &str) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM token_blacklist WHERE token = $1)",
        )
        .bind(token)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to check blacklist", e))
    }

    /// List every blacklist entry, newest expiry first.
    pub async fn list_all(&self) -> AppResult<Vec<BlacklistedToken>> {
        sqlx::query_as::<_, BlacklistedToken>(
            "SELECT * FROM token_blacklist ORDER BY expiration_date DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list blacklist", e))
    }

    /// Delete a single entry. Returns `false` when no row matched.
    pub async fn delete(&self, token: &str) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM token_blacklist WHERE token = $1")
            .bind(token)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete blacklist entry", e)
            })?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete every entry whose expiry has passed. Returns the count.
    pub async fn delete_expired(&self, now: DateTime<Utc>) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM token_blacklist WHERE expiration_date < $1")
            .bind(now)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    "Failed to delete expired blacklist entries",
                    e,
                )
            })?;
        Ok(result.rows_affected())
    }
}
