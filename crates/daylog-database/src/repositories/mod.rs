//! Repository implementations for all Daylog entities.

pub mod activity;
pub mod blacklist;
pub mod user;

pub use activity::ActivityRepository;
pub use blacklist::BlacklistRepository;
pub use user::UserRepository;
