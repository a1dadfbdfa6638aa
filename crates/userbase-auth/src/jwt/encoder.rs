//! JWT token creation with configurable signing secret and TTL.

use chrono::Utc;
use jsonwebtoken::{EncodingKey, Header, encode};
use uuid::Uuid;

use userbase_core::config::auth::AuthConfig;
use userbase_core::error::AppError;
use userbase_entity::user::UserRole;

use super::claims::Claims;

/// Creates signed JWT tokens binding an identity to a role.
#[derive(Clone)]
pub struct TokenEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// Token TTL in seconds.
    ttl_seconds: i64,
}

impl std::fmt::Debug for TokenEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenEncoder")
            .field("ttl_seconds", &self.ttl_seconds)
            .finish()
    }
}

impl TokenEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            ttl_seconds: config.token_ttl_seconds as i64,
        }
    }

    /// Issues a signed token for the given user and role.
    ///
    /// The expiration is absolute: issue time plus the configured TTL.
    /// Signing is deterministic given the same secret, claims, and clock.
    pub fn issue(&self, user_id: Uuid, role: UserRole) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id,
            role,
            iat: now.timestamp(),
            exp: now.timestamp() + self.ttl_seconds,
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode token: {e}")))
    }
}
