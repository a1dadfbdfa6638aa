//! `AuthUser` extractor — the access gate.
//!
//! Pulls the bearer token from the Authorization header, validates it, and
//! injects the per-request identity context. A missing credential is
//! rejected before the decoder is ever invoked; a present-but-invalid
//! credential is rejected with one generic message regardless of whether it
//! was malformed, expired, or signed with the wrong key (the specific reason
//! is traced, not surfaced).

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use uuid::Uuid;

use userbase_core::error::AppError;
use userbase_entity::user::UserRole;

use crate::state::AppState;

/// Extracted authenticated identity available in handlers.
///
/// Ephemeral, per-request, derived entirely from the verified token; never
/// persisted and never re-read from the store.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    /// The authenticated user's id (the token's subject).
    pub user_id: Uuid,
    /// The role claimed at token issuance.
    pub role: UserRole,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)
            .ok_or_else(|| AppError::authentication("No bearer credential supplied"))?;

        let claims = state.token_decoder.decode(token).map_err(|e| {
            tracing::debug!(reason = %e, "Token rejected");
            AppError::authentication("Invalid token")
        })?;

        Ok(AuthUser {
            user_id: claims.sub,
            role: claims.role,
        })
    }
}

/// Extract the bearer token from the Authorization header, if present.
///
/// Returns `None` when the header is absent, unreadable, or missing the
/// `Bearer ` scheme marker — all treated as "no credential supplied".
fn bearer_token(parts: &Parts) -> Option<&str> {
    let header = parts
        .headers
        .get(axum::http::header::AUTHORIZATION)?
        .to_str()
        .ok()?;

    let token = header.strip_prefix("Bearer ")?.trim();
    if token.is_empty() { None } else { Some(token) }
}
