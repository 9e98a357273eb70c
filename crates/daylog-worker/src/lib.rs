//! # daylog-worker
//!
//! Background maintenance for Daylog. The only job today is the
//! blacklist sweeper, which deletes revoked tokens whose own expiry has
//! passed: once a token is expired the guard rejects it anyway, so the
//! blacklist row is dead weight.

pub mod scheduler;
pub mod sweeper;

pub use scheduler::SweepScheduler;
pub use sweeper::BlacklistSweeper;
