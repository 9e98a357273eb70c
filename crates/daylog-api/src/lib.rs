//! # daylog-api
//!
//! HTTP API layer for Daylog built on Axum.
//!
//! Provides the REST endpoints, cookie session-guard extractors,
//! middleware (CORS, tracing, request logging), DTOs, and error mapping.

pub mod cookies;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
