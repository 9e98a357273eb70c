//! Request body DTOs.

use serde::Deserialize;

/// Login form (`application/x-www-form-urlencoded`).
#[derive(Debug, Clone, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Registration request body.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

/// Body for toggling an activity's completion flag.
#[derive(Debug, Clone, Deserialize)]
pub struct PatchActivityBody {
    pub done: bool,
}
