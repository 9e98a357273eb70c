//! Request logging middleware.

use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

/// Logs every request with method, path, status, and latency.
pub async fn request_logging(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let start = Instant::now();

    let response = next.run(request).await;

    let status = response.status();
    let latency_ms = start.elapsed().as_millis();

    if status.is_server_error() {
        tracing::error!(%method, %path, %status, latency_ms, "Request failed");
    } else if status.is_client_error() {
        tracing::warn!(%method, %path, %status, latency_ms, "Request rejected");
    } else {
        tracing::info!(%method, %path, %status, latency_ms, "Request completed");
    }

    response
}
