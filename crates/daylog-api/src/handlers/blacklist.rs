//! Admin handlers for inspecting the token blacklist.

use axum::Json;
use axum::extract::{Path, State};

use daylog_entity::blacklist::BlacklistedToken;

use crate::dto::MessageResponse;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /admin/blacklist: list all blacklisted tokens.
pub async fn list(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> Result<Json<Vec<BlacklistedToken>>, ApiError> {
    let entries = state.blacklist_repo.list_all().await?;
    Ok(Json(entries))
}

/// DELETE /admin/blacklist/{token}: drop a single entry. Idempotent.
pub async fn delete(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(token): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.blacklist_repo.delete(&token).await?;
    Ok(Json(MessageResponse::new("Deleted")))
}
