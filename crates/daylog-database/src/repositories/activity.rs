//! Activity repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use daylog_core::error::{AppError, ErrorKind};
use daylog_core::result::AppResult;
use daylog_entity::activity::Activity;

/// Repository for activity CRUD operations.
#[derive(Debug, Clone)]
pub struct ActivityRepository {
    pool: PgPool,
}

impl ActivityRepository {
    /// Create a new activity repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all activities.
    pub async fn list(&self) -> AppResult<Vec<Activity>> {
        sqlx::query_as::<_, Activity>("SELECT * FROM activities ORDER BY date NULLS LAST, title")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list activities", e))
    }

    /// Find an activity by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Activity>> {
        sqlx::query_as::<_, Activity>("SELECT * FROM activities WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find activity", e))
    }

    /// Insert a new activity row.
    pub async fn create(&self, activity: &Activity) -> AppResult<Activity> {
        sqlx::query_as::<_, Activity>(
            "INSERT INTO activities (id, title, notes, date, done) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING *",
        )
        .bind(activity.id)
        .bind(&activity.title)
        .bind(&activity.notes)
        .bind(activity.date)
        .bind(activity.done)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create activity", e))
    }

    /// Update the completion flag. Returns `false` when no row matched.
    pub async fn set_done(&self, id: Uuid, done: bool) -> AppResult<bool> {
        let result = sqlx::query("UPDATE activities SET done = $2 WHERE id = $1")
            .bind(id)
            .bind(done)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to update activity", e)
            })?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete an activity. Returns `false` when no row matched.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM activities WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete activity", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}
