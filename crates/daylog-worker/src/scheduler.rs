//! Cron scheduling for the blacklist sweeper.

use std::sync::Arc;

use tokio_cron_scheduler::{Job, JobScheduler};
use tracing::info;

use daylog_core::error::AppError;
use daylog_core::result::AppResult;

use crate::sweeper::BlacklistSweeper;

/// Owns the cron scheduler driving periodic blacklist sweeps.
pub struct SweepScheduler {
    scheduler: JobScheduler,
}

impl SweepScheduler {
    /// Builds and starts the scheduler with the given cron expression.
    ///
    /// The expression uses the seconds-first cron syntax, e.g.
    /// `0 0 * * * *` for the top of every hour.
    pub async fn start(sweeper: Arc<BlacklistSweeper>, schedule: &str) -> AppResult<Self> {
        let scheduler = JobScheduler::new()
            .await
            .map_err(|e| AppError::internal(format!("Failed to create job scheduler: {e}")))?;

        let job = Job::new_async(schedule, move |_id, _lock| {
            let sweeper = sweeper.clone();
            Box::pin(async move {
                sweeper.run_logged().await;
            })
        })
        .map_err(|e| AppError::internal(format!("Invalid sweep schedule '{schedule}': {e}")))?;

        scheduler
            .add(job)
            .await
            .map_err(|e| AppError::internal(format!("Failed to register sweep job: {e}")))?;

        scheduler
            .start()
            .await
            .map_err(|e| AppError::internal(format!("Failed to start job scheduler: {e}")))?;

        info!(schedule, "Blacklist sweep scheduler started");
        Ok(Self { scheduler })
    }

    /// Stops the scheduler. Pending job runs are abandoned.
    pub async fn shutdown(&mut self) -> AppResult<()> {
        self.scheduler
            .shutdown()
            .await
            .map_err(|e| AppError::internal(format!("Failed to shut down job scheduler: {e}")))
    }
}
