//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use daylog_auth::authenticator::Authenticator;
use daylog_auth::jwt::decoder::TokenDecoder;
use daylog_auth::jwt::encoder::TokenEncoder;
use daylog_auth::revocation::TokenRevoker;
use daylog_core::config::AppConfig;
use daylog_database::DatabasePool;
use daylog_database::repositories::blacklist::BlacklistRepository;
use daylog_database::repositories::user::UserRepository;
use daylog_service::activity::ActivityService;
use daylog_service::user::UserService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// PostgreSQL connection pool
    pub db: DatabasePool,

    // ── Auth ─────────────────────────────────────────────────
    /// Token encoder
    pub token_encoder: Arc<TokenEncoder>,
    /// Token decoder (signature-only validation)
    pub token_decoder: Arc<TokenDecoder>,
    /// Credential authenticator
    pub authenticator: Arc<Authenticator>,
    /// Blacklist-backed token revoker
    pub token_revoker: Arc<TokenRevoker>,

    // ── Repositories ─────────────────────────────────────────
    /// User repository
    pub user_repo: Arc<UserRepository>,
    /// Token blacklist repository
    pub blacklist_repo: Arc<BlacklistRepository>,

    // ── Services ─────────────────────────────────────────────
    /// User registration/profile service
    pub user_service: Arc<UserService>,
    /// Activity CRUD service
    pub activity_service: Arc<ActivityService>,
}
