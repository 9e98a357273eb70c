//! HTTP request handlers.

pub mod activity;
pub mod blacklist;
pub mod health;
pub mod oauth2;
pub mod user;
