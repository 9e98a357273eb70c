//! Structural password policy enforced at registration.

use daylog_core::config::auth::AuthConfig;
use daylog_core::error::AppError;

/// Validates candidate passwords against the structural rules:
/// minimum length, an uppercase letter, a digit, and a special character.
#[derive(Debug, Clone)]
pub struct PasswordPolicy {
    min_length: usize,
}

impl PasswordPolicy {
    /// Creates a policy from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            min_length: config.password_min_length,
        }
    }

    /// Checks a candidate password, returning a validation error with a
    /// client-facing message on the first rule that fails.
    pub fn validate(&self, password: &str) -> Result<(), AppError> {
        if password.chars().count() < self.min_length {
            return Err(AppError::validation(format!(
                "Password is too short (at least {} chars)",
                self.min_length
            )));
        }
        if !password.chars().any(|c| c.is_uppercase()) {
            return Err(AppError::validation(
                "Password must have at least 1 capital letter",
            ));
        }
        if !password.chars().any(|c| c.is_ascii_digit()) {
            return Err(AppError::validation("Password must have at least 1 number"));
        }
        // anything outside [A-Za-z0-9] counts, underscore included
        if !password.chars().any(|c| !c.is_alphanumeric()) {
            return Err(AppError::validation(
                "Password must have at least 1 special character",
            ));
        }
        Ok(())
    }
}
