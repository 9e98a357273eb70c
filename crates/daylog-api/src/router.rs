//! Route table and layer stack.

use std::time::Duration;

use axum::Router;
use axum::http::{HeaderValue, Method};
use axum::middleware as axum_middleware;
use axum::routing::{delete, get, patch, post};
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use daylog_core::config::app::CorsConfig;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Builds the complete application router.
pub fn build_router(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config.server.cors);

    Router::new()
        .route("/health", get(handlers::health::health))
        .route(
            "/oauth2/token",
            post(handlers::oauth2::login)
                .delete(handlers::oauth2::logout)
                .patch(handlers::oauth2::refresh),
        )
        .route("/user/register", post(handlers::user::register))
        .route("/user/get", get(handlers::user::get_me))
        .route("/v1/activities", get(handlers::activity::list))
        .route("/v1/activity", post(handlers::activity::create))
        .route(
            "/v1/activity/{id}",
            patch(handlers::activity::patch).delete(handlers::activity::delete),
        )
        .route("/admin/blacklist", get(handlers::blacklist::list))
        .route(
            "/admin/blacklist/{token}",
            delete(handlers::blacklist::delete),
        )
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Builds the CORS layer from configuration.
fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    let origin = if config.allowed_origins.iter().any(|o| o == "*") {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(
            config
                .allowed_origins
                .iter()
                .filter_map(|o| o.parse::<HeaderValue>().ok()),
        )
    };

    let methods: Vec<Method> = config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse::<Method>().ok())
        .collect();

    let headers = if config.allowed_headers.iter().any(|h| h == "*") {
        AllowHeaders::any()
    } else {
        AllowHeaders::list(
            config
                .allowed_headers
                .iter()
                .filter_map(|h| h.parse().ok()),
        )
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(methods)
        .allow_headers(headers)
        .max_age(Duration::from_secs(config.max_age_seconds))
}
