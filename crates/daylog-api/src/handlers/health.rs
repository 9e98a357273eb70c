//! Health check handler.

use axum::Json;
use axum::extract::State;

use crate::dto::HealthResponse;
use crate::state::AppState;

/// GET /health: liveness plus a database ping.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let database = match state.db.health_check().await {
        Ok(()) => "connected".to_string(),
        Err(e) => {
            tracing::warn!(error = %e, "Health check database ping failed");
            "unreachable".to_string()
        }
    };

    Json(HealthResponse {
        status: if database == "connected" {
            "ok".to_string()
        } else {
            "degraded".to_string()
        },
        version: env!("CARGO_PKG_VERSION").to_string(),
        database,
    })
}
