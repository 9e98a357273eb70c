//! Session-guard extractors.

pub mod auth;

pub use auth::{AuthUser, RefreshSession};
