//! JWT claims structure embedded in every issued token.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use userbase_entity::user::UserRole;

/// Claims payload binding an identity to a role for a bounded time window.
///
/// The token carrying these claims is the entire authorization artifact:
/// verification never re-reads the store, so the claims stay authoritative
/// until `exp` even if the underlying account changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject — the user ID.
    pub sub: Uuid,
    /// User role at the time of token issuance.
    pub role: UserRole,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

impl Claims {
    /// Returns the user ID from the subject claim.
    pub fn user_id(&self) -> Uuid {
        self.sub
    }

    /// Checks whether this token has expired. The boundary is inclusive:
    /// a token is already expired at exactly `exp`.
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}
