//! Password hashing and structural policy checks.

pub mod hasher;
pub mod policy;

pub use hasher::PasswordHasher;
pub use policy::PasswordPolicy;
