//! Client-facing authentication error taxonomy.
//!
//! Every variant carries a fixed detail string that is part of the
//! external API contract; the HTTP layer serves them verbatim.

use thiserror::Error;

use daylog_core::error::AppError;

/// Authentication and session-guard rejections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    /// One or both session cookies are missing from the request.
    #[error("Invalid credentials")]
    MissingCredentials,
    /// Unknown email, wrong password, or a principal that no longer exists.
    #[error("Invalid credentials")]
    InvalidCredentials,
    /// The account exists but has not been activated.
    #[error("Activate your account")]
    AccountInactive,
    /// The presented access token has been revoked.
    #[error("Blacklisted token")]
    Blacklisted,
    /// Signature or format verification failed.
    #[error("Invalid token")]
    InvalidToken,
    /// The access token's expiration date has passed.
    #[error("Outdated access_token")]
    AccessExpired,
    /// The refresh token's expiration date has passed.
    #[error("Outdated refresh_token")]
    RefreshExpired,
}

impl AuthError {
    /// The fixed client-facing detail string for this rejection.
    pub fn detail(&self) -> &'static str {
        match self {
            Self::MissingCredentials | Self::InvalidCredentials => "Invalid credentials",
            Self::AccountInactive => "Activate your account",
            Self::Blacklisted => "Blacklisted token",
            Self::InvalidToken => "Invalid token",
            Self::AccessExpired => "Outdated access_token",
            Self::RefreshExpired => "Outdated refresh_token",
        }
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        AppError::authentication(err.detail())
    }
}
