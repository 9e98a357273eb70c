//! Token signature validation.
//!
//! Expiry lives in the custom `expiration_date` claim and is compared
//! against the wall clock by callers, so registered-claim validation
//! (`exp`) is disabled here. The decoder checks signature and algorithm
//! only.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use daylog_core::config::auth::AuthConfig;

use crate::error::AuthError;

use super::claims::Claims;

/// Validates token signatures and deserializes claims.
#[derive(Clone)]
pub struct TokenDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration (signature + algorithm only).
    validation: Validation,
}

impl std::fmt::Debug for TokenDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl TokenDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // expiry is the custom expiration_date claim, checked by callers
        validation.validate_exp = false;
        validation.set_required_spec_claims::<&str>(&[]);

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes a token, verifying signature and algorithm.
    ///
    /// Any verification or format failure maps to
    /// [`AuthError::InvalidToken`]; expiry is not checked here.
    pub fn decode(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|_| AuthError::InvalidToken)
    }
}
