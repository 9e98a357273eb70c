//! Activity entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A single to-do style activity.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Activity {
    /// Unique activity identifier.
    pub id: Uuid,
    /// Short title.
    pub title: String,
    /// Free-form notes (empty string when not provided).
    pub notes: String,
    /// Optional date the activity is planned for.
    pub date: Option<DateTime<Utc>>,
    /// Whether the activity has been completed.
    pub done: bool,
}

/// Payload for creating a new activity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateActivity {
    /// Short title.
    pub title: String,
    /// Free-form notes.
    #[serde(default)]
    pub notes: Option<String>,
    /// Optional planned date.
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    /// Initial completion state.
    #[serde(default)]
    pub done: Option<bool>,
}
