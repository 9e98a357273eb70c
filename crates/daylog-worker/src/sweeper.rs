//! Expired-token blacklist sweeper.

use std::sync::Arc;

use chrono::Utc;
use tracing::{error, info};

use daylog_core::result::AppResult;
use daylog_database::repositories::blacklist::BlacklistRepository;

/// Removes blacklist entries whose `expiration_date` has passed.
#[derive(Debug, Clone)]
pub struct BlacklistSweeper {
    blacklist: Arc<BlacklistRepository>,
}

impl BlacklistSweeper {
    /// Creates a new sweeper.
    pub fn new(blacklist: Arc<BlacklistRepository>) -> Self {
        Self { blacklist }
    }

    /// Runs a single sweep and returns the number of entries removed.
    ///
    /// The whole sweep is one `DELETE` statement; there is no batching
    /// or pagination, the blacklist stays small by construction.
    pub async fn run_sweep(&self) -> AppResult<u64> {
        let removed = self.blacklist.delete_expired(Utc::now()).await?;
        info!(removed, "Swept expired blacklist entries");
        Ok(removed)
    }

    /// Runs a sweep, logging any failure instead of propagating it.
    ///
    /// A failed sweep leaves stale rows behind until the next tick;
    /// it must never take the scheduler down.
    pub async fn run_logged(&self) {
        if let Err(e) = self.run_sweep().await {
            error!(error = %e, "Blacklist sweep failed");
        }
    }
}
