//! Credential verification and token pair issuance.

use std::sync::Arc;

use tracing::info;

use daylog_core::result::AppResult;
use daylog_database::repositories::user::UserRepository;

use crate::error::AuthError;
use crate::jwt::encoder::{TokenEncoder, TokenPair};
use crate::password::hasher::PasswordHasher;

/// Verifies submitted credentials and issues token pairs.
#[derive(Debug, Clone)]
pub struct Authenticator {
    users: Arc<UserRepository>,
    hasher: Arc<PasswordHasher>,
    encoder: Arc<TokenEncoder>,
    /// Whether inactive accounts are rejected at login.
    enforce_active_account: bool,
}

impl Authenticator {
    /// Creates a new authenticator.
    pub fn new(
        users: Arc<UserRepository>,
        hasher: Arc<PasswordHasher>,
        encoder: Arc<TokenEncoder>,
        enforce_active_account: bool,
    ) -> Self {
        Self {
            users,
            hasher,
            encoder,
            enforce_active_account,
        }
    }

    /// Verifies email + password and issues an access/refresh pair.
    ///
    /// An unknown email and a wrong password are indistinguishable to the
    /// caller; both surface as [`AuthError::InvalidCredentials`]. The
    /// password itself is never logged.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<TokenPair> {
        let user = match self.users.find_by_email(email).await? {
            Some(user) => user,
            None => return Err(AuthError::InvalidCredentials.into()),
        };

        if !self.hasher.verify_password(password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        if self.enforce_active_account && !user.is_active {
            return Err(AuthError::AccountInactive.into());
        }

        let pair = self.encoder.issue_pair(user.id)?;
        info!(user_id = user.id, "Issued token pair");
        Ok(pair)
    }
}
