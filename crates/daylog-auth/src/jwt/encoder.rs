//! Token creation with configurable signing and TTL.

use chrono::{DateTime, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};

use daylog_core::config::auth::AuthConfig;
use daylog_core::error::AppError;

use super::claims::{Claims, TokenKind};

/// Creates signed access and refresh tokens.
#[derive(Clone)]
pub struct TokenEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// Access token TTL in minutes.
    access_ttl_minutes: i64,
    /// Refresh token TTL in days.
    refresh_ttl_days: i64,
}

impl std::fmt::Debug for TokenEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenEncoder")
            .field("access_ttl_minutes", &self.access_ttl_minutes)
            .field("refresh_ttl_days", &self.refresh_ttl_days)
            .finish()
    }
}

/// Result of a successful token pair generation.
#[derive(Debug, Clone)]
pub struct TokenPair {
    /// Short-lived access token.
    pub access_token: String,
    /// Long-lived refresh token.
    pub refresh_token: String,
    /// Access token expiration timestamp.
    pub access_expires_at: DateTime<Utc>,
    /// Refresh token expiration timestamp.
    pub refresh_expires_at: DateTime<Utc>,
}

impl TokenEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            access_ttl_minutes: config.access_ttl_minutes as i64,
            refresh_ttl_days: config.refresh_ttl_days as i64,
        }
    }

    /// The configured access token TTL in seconds (cookie max-age).
    pub fn access_ttl_seconds(&self) -> i64 {
        self.access_ttl_minutes * 60
    }

    /// The configured refresh token TTL in seconds (cookie max-age).
    pub fn refresh_ttl_seconds(&self) -> i64 {
        self.refresh_ttl_days * 24 * 60 * 60
    }

    /// Issues a single signed token of the given kind.
    ///
    /// Returns the encoded token together with the expiry stamped into
    /// its `expiration_date` claim.
    pub fn issue(
        &self,
        user_id: i64,
        kind: TokenKind,
    ) -> Result<(String, DateTime<Utc>), AppError> {
        let now = Utc::now();
        let expiration_date = match kind {
            TokenKind::Access => now + chrono::Duration::minutes(self.access_ttl_minutes),
            TokenKind::Refresh => now + chrono::Duration::days(self.refresh_ttl_days),
        };

        let claims = Claims {
            user_id,
            kind,
            token_type: "Bearer".to_string(),
            expiration_date,
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode token: {e}")))?;

        Ok((token, expiration_date))
    }

    /// Issues an access + refresh token pair stamped with the same user id.
    pub fn issue_pair(&self, user_id: i64) -> Result<TokenPair, AppError> {
        let (access_token, access_expires_at) = self.issue(user_id, TokenKind::Access)?;
        let (refresh_token, refresh_expires_at) = self.issue(user_id, TokenKind::Refresh)?;

        Ok(TokenPair {
            access_token,
            refresh_token,
            access_expires_at,
            refresh_expires_at,
        })
    }
}
