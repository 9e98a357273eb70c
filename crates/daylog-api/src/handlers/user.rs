//! User account handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::dto::{MessageResponse, RegisterRequest, UserResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /user/register: create a new account.
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .user_service
        .register(&payload.email, &payload.password)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("User registered")),
    ))
}

/// GET /user/get: fetch the authenticated user's own profile.
pub async fn get_me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state.user_service.get_profile(auth.user_id).await?;
    Ok(Json(UserResponse::from(user)))
}
