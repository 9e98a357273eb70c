//! Session lifecycle handlers: login, logout, refresh.
//!
//! All three operate on the same `/oauth2/token` route with different
//! methods. Tokens never appear in response bodies; they only travel in
//! httpOnly cookies.

use axum::extract::State;
use axum::{Form, Json};
use axum::http::{HeaderMap, StatusCode, header::SET_COOKIE};
use axum::response::{AppendHeaders, IntoResponse};

use daylog_auth::jwt::claims::TokenKind;

use crate::cookies::{
    ACCESS_COOKIE_NAME, REFRESH_COOKIE_NAME, clear_cookie, get_cookie, session_cookie,
};
use crate::dto::{LoginForm, MessageResponse};
use crate::error::ApiError;
use crate::extractors::RefreshSession;
use crate::state::AppState;

/// POST /oauth2/token: authenticate and open a session.
///
/// Issues a fresh token pair as session cookies. Wrong email and wrong
/// password are indistinguishable to the caller.
pub async fn login(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Result<impl IntoResponse, ApiError> {
    let pair = state
        .authenticator
        .login(&form.email, &form.password)
        .await?;

    let cookies = AppendHeaders([
        (
            SET_COOKIE,
            session_cookie(
                ACCESS_COOKIE_NAME,
                &pair.access_token,
                state.token_encoder.access_ttl_seconds(),
            ),
        ),
        (
            SET_COOKIE,
            session_cookie(
                REFRESH_COOKIE_NAME,
                &pair.refresh_token,
                state.token_encoder.refresh_ttl_seconds(),
            ),
        ),
    ]);

    Ok((
        StatusCode::CREATED,
        cookies,
        Json(MessageResponse::new("Authenticated")),
    ))
}

/// DELETE /oauth2/token: close the session.
///
/// Revokes whichever session cookies are present and clears both on the
/// client. Always succeeds: logging out without a session, or with
/// garbage cookies, is not an error.
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ApiError> {
    if let Some(token) = get_cookie(&headers, ACCESS_COOKIE_NAME) {
        state.token_revoker.revoke(token).await?;
    }
    if let Some(token) = get_cookie(&headers, REFRESH_COOKIE_NAME) {
        state.token_revoker.revoke(token).await?;
    }

    let cookies = AppendHeaders([
        (SET_COOKIE, clear_cookie(ACCESS_COOKIE_NAME)),
        (SET_COOKIE, clear_cookie(REFRESH_COOKIE_NAME)),
    ]);

    Ok((cookies, Json(MessageResponse::new("Logged out"))))
}

/// PATCH /oauth2/token: mint a new access token from a live refresh token.
///
/// The refresh token is trusted on its own here; the expired access
/// token this call exists to replace is never inspected.
pub async fn refresh(
    State(state): State<AppState>,
    session: RefreshSession,
) -> Result<impl IntoResponse, ApiError> {
    let (access_token, _) = state
        .token_encoder
        .issue(session.user_id, TokenKind::Access)?;

    let cookies = AppendHeaders([(
        SET_COOKIE,
        session_cookie(
            ACCESS_COOKIE_NAME,
            &access_token,
            state.token_encoder.access_ttl_seconds(),
        ),
    )]);

    Ok((
        StatusCode::CREATED,
        cookies,
        Json(MessageResponse::new("Refreshed")),
    ))
}
