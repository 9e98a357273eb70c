//! # daylog-service
//!
//! Business logic services for the Daylog backend: user registration and
//! profile access, and activity CRUD orchestration.

pub mod activity;
pub mod user;

pub use activity::ActivityService;
pub use user::UserService;
