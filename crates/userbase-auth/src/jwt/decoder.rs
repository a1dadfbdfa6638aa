//! JWT token validation.

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use userbase_core::config::auth::AuthConfig;
use userbase_core::error::AppError;

use super::claims::Claims;

/// Validates JWT tokens against the configured signing secret.
///
/// A pure function of the secret, the presented token, and the clock: no
/// store lookups, no revocation state. A token stays valid until its `exp`
/// even if the underlying account changes.
#[derive(Clone)]
pub struct TokenDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
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
        validation.validate_exp = true;
        // Zero leeway: expiration is an exact boundary.
        validation.leeway = 0;

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and validates a token string, recovering its claims.
    ///
    /// Rejects when the signature does not verify, the payload is malformed,
    /// or the current time is at or past the embedded expiration. The error
    /// messages distinguish the failure modes for logging; the HTTP layer
    /// collapses them into one generic 401.
    pub fn decode(&self, token: &str) -> Result<Claims, AppError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        AppError::authentication("Token has expired")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidToken => {
                        AppError::authentication("Invalid token format")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        AppError::authentication("Invalid token signature")
                    }
                    _ => AppError::authentication(format!("Token validation failed: {e}")),
                }
            })?;

        let claims = token_data.claims;

        // jsonwebtoken treats exp == now as still valid; the contract here
        // is that a token is rejected at exactly its expiration instant.
        if Utc::now().timestamp() >= claims.exp {
            return Err(AppError::authentication("Token has expired"));
        }

        Ok(claims)
    }
}
