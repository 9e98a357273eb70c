//! Background worker configuration.

use serde::{Deserialize, Serialize};

/// Background sweep worker configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerConfig {
    /// Whether the worker is enabled.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Cron expression for the blacklist sweep (six-field, seconds first).
    #[serde(default = "default_sweep_schedule")]
    pub sweep_schedule: String,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            sweep_schedule: default_sweep_schedule(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_sweep_schedule() -> String {
    // top of every hour
    "0 0 * * * *".to_string()
}
