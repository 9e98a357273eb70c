//! Activity CRUD orchestration.

use std::sync::Arc;

use uuid::Uuid;

use daylog_core::error::AppError;
use daylog_core::result::AppResult;
use daylog_database::repositories::activity::ActivityRepository;
use daylog_entity::activity::{Activity, CreateActivity};

/// Orchestrates activity CRUD over the repository.
#[derive(Debug, Clone)]
pub struct ActivityService {
    activities: Arc<ActivityRepository>,
}

impl ActivityService {
    /// Creates a new activity service.
    pub fn new(activities: Arc<ActivityRepository>) -> Self {
        Self { activities }
    }

    /// Lists all activities.
    pub async fn list(&self) -> AppResult<Vec<Activity>> {
        self.activities.list().await
    }

    /// Creates a new activity with a fresh id, defaulting notes to empty
    /// and the completion flag to false.
    pub async fn create(&self, payload: CreateActivity) -> AppResult<Activity> {
        let activity = Activity {
            id: Uuid::new_v4(),
            title: payload.title,
            notes: payload.notes.unwrap_or_default(),
            date: payload.date,
            done: payload.done.unwrap_or(false),
        };
        self.activities.create(&activity).await
    }

    /// Updates the completion flag of an existing activity.
    pub async fn set_done(&self, id: Uuid, done: bool) -> AppResult<()> {
        if !self.activities.set_done(id, done).await? {
            return Err(AppError::not_found("Activity not found"));
        }
        Ok(())
    }

    /// Deletes an activity. Deleting a missing activity is a no-op.
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.activities.delete(id).await?;
        Ok(())
    }
}
