//! User registration and profile service.

use std::sync::Arc;

use tracing::info;

use daylog_auth::password::hasher::PasswordHasher;
use daylog_auth::password::policy::PasswordPolicy;
use daylog_core::error::AppError;
use daylog_core::result::AppResult;
use daylog_database::repositories::user::UserRepository;
use daylog_entity::user::{CreateUser, User};

/// Orchestrates user registration and profile lookup.
#[derive(Debug, Clone)]
pub struct UserService {
    users: Arc<UserRepository>,
    hasher: Arc<PasswordHasher>,
    policy: PasswordPolicy,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(
        users: Arc<UserRepository>,
        hasher: Arc<PasswordHasher>,
        policy: PasswordPolicy,
    ) -> Self {
        Self {
            users,
            hasher,
            policy,
        }
    }

    /// Registers a new account: policy check, uniqueness check, hash, insert.
    pub async fn register(&self, email: &str, password: &str) -> AppResult<User> {
        self.policy.validate(password)?;

        if self.users.find_by_email(email).await?.is_some() {
            return Err(AppError::conflict("Account with this email already exists"));
        }

        let password_hash = self.hasher.hash_password(password)?;
        let user = self
            .users
            .create(&CreateUser {
                email: email.to_string(),
                password_hash,
            })
            .await?;

        info!(user_id = user.id, "Registered new user");
        Ok(user)
    }

    /// Fetches a user's own profile by id.
    pub async fn get_profile(&self, user_id: i64) -> AppResult<User> {
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }
}
