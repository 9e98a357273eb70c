//! # daylog-auth
//!
//! Authentication core for the Daylog backend.
//!
//! ## Modules
//!
//! - `jwt`: token claims, encoding, and signature-only decoding
//! - `password`: Argon2id password hashing and structural policy checks
//! - `authenticator`: credential verification and token pair issuance
//! - `revocation`: blacklist-backed token revocation (logout)
//! - `error`: the client-facing authentication error taxonomy

pub mod authenticator;
pub mod error;
pub mod jwt;
pub mod password;
pub mod revocation;

pub use authenticator::Authenticator;
pub use error::AuthError;
pub use jwt::{Claims, TokenDecoder, TokenEncoder, TokenKind, TokenPair};
pub use password::{PasswordHasher, PasswordPolicy};
pub use revocation::TokenRevoker;
