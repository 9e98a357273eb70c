//! Token claims embedded in access and refresh tokens.
//!
//! Tokens carry their expiry in a custom `expiration_date` claim (RFC 3339)
//! instead of the registered `exp` claim, and expiry is checked manually at
//! validation time. The decoder must therefore not enforce `exp`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Claims payload carried by every token. Exactly these four fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// The user this token was issued for.
    pub user_id: i64,
    /// Whether this is an access or a refresh token.
    #[serde(rename = "type")]
    pub kind: TokenKind,
    /// Token scheme label, always `"Bearer"`.
    pub token_type: String,
    /// Wall-clock expiry, checked manually against UTC now.
    pub expiration_date: DateTime<Utc>,
}

/// Distinguishes access tokens from refresh tokens.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    /// Short-lived access token for API requests.
    Access,
    /// Long-lived refresh token for obtaining new access tokens.
    Refresh,
}

impl Claims {
    /// Checks whether this token's claimed expiry has passed.
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expiration_date
    }
}
