//! # daylog-entity
//!
//! Domain entity models for the Daylog backend: users, blacklisted
//! tokens, and activities.

pub mod activity;
pub mod blacklist;
pub mod user;

pub use activity::{Activity, CreateActivity};
pub use blacklist::BlacklistedToken;
pub use user::{CreateUser, User};
