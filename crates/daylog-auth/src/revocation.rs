//! Blacklist-backed token revocation.

use std::sync::Arc;

use tracing::debug;

use daylog_core::error::ErrorKind;
use daylog_core::result::AppResult;
use daylog_database::repositories::blacklist::BlacklistRepository;

use crate::jwt::decoder::TokenDecoder;

/// Revokes tokens by recording them in the blacklist.
#[derive(Debug, Clone)]
pub struct TokenRevoker {
    decoder: Arc<TokenDecoder>,
    blacklist: Arc<BlacklistRepository>,
}

impl TokenRevoker {
    /// Creates a new revoker.
    pub fn new(decoder: Arc<TokenDecoder>, blacklist: Arc<BlacklistRepository>) -> Self {
        Self { decoder, blacklist }
    }

    /// Revokes a single token string.
    ///
    /// Tokens that fail signature verification are skipped, as are
    /// tokens already on the blacklist; both return `Ok(false)`. The
    /// blacklist entry inherits the token's own `expiration_date` claim
    /// so the sweeper can expire it without re-decoding.
    pub async fn revoke(&self, token: &str) -> AppResult<bool> {
        let claims = match self.decoder.decode(token) {
            Ok(claims) => claims,
            Err(_) => {
                debug!("Skipping revocation of undecodable token");
                return Ok(false);
            }
        };

        if self.blacklist.contains(token).await? {
            return Ok(false);
        }

        match self.blacklist.insert(token, claims.expiration_date).await {
            Ok(()) => Ok(true),
            // lost a race with a concurrent revocation of the same token
            Err(e) if e.kind == ErrorKind::Conflict => Ok(false),
            Err(e) => Err(e),
        }
    }
}
