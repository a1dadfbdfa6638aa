//! RBAC helpers for role-based route guarding.

use userbase_core::error::AppError;
use userbase_entity::user::UserRole;

use crate::extractors::AuthUser;

/// Checks that the authenticated user has the Admin role.
///
/// Exact match, no hierarchy: this is the single privileged gate in the
/// system. Produces 403, distinct from the 401 of a failed authentication.
pub fn require_admin(auth: &AuthUser) -> Result<(), AppError> {
    if auth.role != UserRole::Admin {
        return Err(AppError::authorization("Admin access required"));
    }
    Ok(())
}
