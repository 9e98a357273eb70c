//! Token claims, encoding, and decoding.

pub mod claims;
pub mod decoder;
pub mod encoder;

pub use claims::{Claims, TokenKind};
pub use decoder::TokenDecoder;
pub use encoder::{TokenEncoder, TokenPair};
