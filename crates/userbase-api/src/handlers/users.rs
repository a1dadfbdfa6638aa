//! Admin user management handlers — update, delete, list.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;
use validator::Validate;

use userbase_core::error::AppError;
use userbase_entity::user::model::UpdateUser;
use userbase_entity::user::User;

use crate::dto::request::UpdateUserRequest;
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::extractors::AuthUser;
use crate::middleware::rbac::require_admin;
use crate::state::AppState;

/// GET /
///
/// Lists all user records. Password hashes never serialize.
pub async fn list_users(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<User>>>, AppError> {
    require_admin(&auth)?;

    let users = state.user_repo.find_all().await?;
    Ok(Json(ApiResponse::ok(users)))
}

/// PUT /{id}
///
/// Applies any subset of username/email/password; a supplied password is
/// re-hashed before persistence. A nonexistent id yields 200 with null
/// data rather than 404.
pub async fn update_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateUserRequest>,
) -> Result<Json<ApiResponse<Option<User>>>, AppError> {
    require_admin(&auth)?;

    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let password_hash = match &req.password {
        Some(password) => Some(state.password_hasher.hash_password(password)?),
        None => None,
    };

    let updated = state
        .user_repo
        .update(
            id,
            UpdateUser {
                username: req.username,
                email: req.email,
                password_hash,
            },
        )
        .await?;

    if updated.is_some() {
        tracing::info!(user_id = %id, admin_id = %auth.user_id, "User updated");
    }

    Ok(Json(ApiResponse::ok(updated)))
}

/// DELETE /{id}
///
/// Deletes the record if it exists; responds with the same message either
/// way, so the operation is idempotent from the caller's view.
pub async fn delete_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, AppError> {
    require_admin(&auth)?;

    let existed = state.user_repo.delete(id).await?;
    if existed {
        tracing::info!(user_id = %id, admin_id = %auth.user_id, "User deleted");
    }

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "User deleted".to_string(),
    })))
}
