//! Cookie-based session guards.
//!
//! [`AuthUser`] is the full guard protected routes use: it requires both
//! session cookies, checks the blacklist, decodes and expiry-checks both
//! tokens, and re-fetches the account row. [`RefreshSession`] is the
//! lighter guard for the refresh endpoint, which only needs a live
//! refresh token.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use daylog_auth::error::AuthError;

use crate::cookies::{ACCESS_COOKIE_NAME, REFRESH_COOKIE_NAME, get_cookie};
use crate::error::ApiError;
use crate::state::AppState;

/// An authenticated session. Extraction runs the full guard chain;
/// any failed step rejects the request before the handler runs.
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// Id of the account the session belongs to.
    pub user_id: i64,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, ApiError> {
        // 1. Both cookies must be present.
        let access_token = get_cookie(&parts.headers, ACCESS_COOKIE_NAME)
            .ok_or(AuthError::MissingCredentials)?
            .to_string();
        let refresh_token = get_cookie(&parts.headers, REFRESH_COOKIE_NAME)
            .ok_or(AuthError::MissingCredentials)?
            .to_string();

        // 2. Revoked sessions are rejected before any decoding; the
        //    blacklist is keyed on the raw access-token string.
        if state.blacklist_repo.contains(&access_token).await? {
            return Err(AuthError::Blacklisted.into());
        }

        // 3. Both tokens must carry a valid signature.
        let access_claims = state.token_decoder.decode(&access_token)?;
        let refresh_claims = state.token_decoder.decode(&refresh_token)?;

        // 4. Expiry, refresh token first.
        if refresh_claims.is_expired() {
            return Err(AuthError::RefreshExpired.into());
        }
        if access_claims.is_expired() {
            return Err(AuthError::AccessExpired.into());
        }

        // 5. The account must still exist; a claim for a deleted user
        //    reads the same as bad credentials.
        let user = state
            .user_repo
            .find_by_id(access_claims.user_id)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if state.config.auth.enforce_active_account && !user.is_active {
            return Err(AuthError::AccountInactive.into());
        }

        Ok(AuthUser { user_id: user.id })
    }
}

/// A session holding a live refresh token. Used by the token refresh
/// endpoint, which must work even when the access token has expired.
#[derive(Debug, Clone)]
pub struct RefreshSession {
    /// Id carried by the refresh token.
    pub user_id: i64,
}

impl FromRequestParts<AppState> for RefreshSession {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, ApiError> {
        let refresh_token = get_cookie(&parts.headers, REFRESH_COOKIE_NAME)
            .ok_or(AuthError::MissingCredentials)?
            .to_string();

        let claims = state.token_decoder.decode(&refresh_token)?;
        if claims.is_expired() {
            return Err(AuthError::RefreshExpired.into());
        }

        Ok(RefreshSession {
            user_id: claims.user_id,
        })
    }
}
