//! Activity CRUD handlers.
//!
//! These routes are open; the session guard protects the account
//! surface, not the activity log.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use uuid::Uuid;

use daylog_entity::activity::{Activity, CreateActivity};

use crate::dto::{MessageResponse, PatchActivityBody};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /v1/activities: list all activities.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Activity>>, ApiError> {
    let activities = state.activity_service.list().await?;
    Ok(Json(activities))
}

/// POST /v1/activity: create an activity.
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<CreateActivity>,
) -> Result<impl IntoResponse, ApiError> {
    state.activity_service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(MessageResponse::new("Created"))))
}

/// PATCH /v1/activity/{id}: set the completion flag.
pub async fn patch(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<PatchActivityBody>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.activity_service.set_done(id, payload.done).await?;
    Ok(Json(MessageResponse::new("Patched")))
}

/// DELETE /v1/activity/{id}: delete an activity. Idempotent.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.activity_service.delete(id).await?;
    Ok(Json(MessageResponse::new("Deleted")))
}
