//! Token blacklist entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A revoked token awaiting expiry.
///
/// The `expiration_date` is copied from the token's own claim at
/// revocation time, so the sweeper can delete entries without
/// re-decoding the token string.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct BlacklistedToken {
    /// The raw encoded token string (primary key).
    pub token: String,
    /// The expiry claimed by the token itself.
    pub expiration_date: DateTime<Utc>,
}

impl BlacklistedToken {
    /// Whether the blacklisted token's own expiry has passed.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.expiration_date
    }
}
