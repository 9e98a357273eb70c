//! Request and response DTOs.

pub mod request;
pub mod response;

pub use request::{LoginForm, PatchActivityBody, RegisterRequest};
pub use response::{HealthResponse, MessageResponse, UserResponse};
