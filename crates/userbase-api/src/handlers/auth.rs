//! Auth handlers — register, login, me.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use validator::Validate;

use userbase_core::error::AppError;
use userbase_entity::user::model::CreateUser;
use userbase_entity::user::UserRole;

use crate::dto::request::{LoginRequest, RegisterRequest};
use crate::dto::response::{ApiResponse, MeResponse, MessageResponse, TokenResponse};
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /register
///
/// Creates a new account with the default `user` role. Duplicate username
/// or email and input validation failures map to 400.
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<ApiResponse<MessageResponse>>), AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let password_hash = state.password_hasher.hash_password(&req.password)?;

    let user = state
        .user_repo
        .create(CreateUser {
            username: req.username,
            email: req.email,
            password_hash,
            role: UserRole::User,
        })
        .await?;

    tracing::info!(user_id = %user.id, "User registered");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(MessageResponse {
            message: "User created successfully".to_string(),
        })),
    ))
}

/// POST /login
///
/// Validates the body, looks up by email, and verifies the password.
/// Empty fields map to 400 before any store access. Unknown email and wrong
/// password produce the same generic 401 so accounts cannot be enumerated.
/// Store failures map to 500.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<ApiResponse<TokenResponse>>, AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let user = state
        .user_repo
        .find_by_email(&req.email)
        .await?
        .ok_or_else(|| AppError::authentication("Invalid credentials"))?;

    let matches = state
        .password_hasher
        .verify_password(&req.password, &user.password_hash)?;
    if !matches {
        return Err(AppError::authentication("Invalid credentials"));
    }

    let token = state.token_encoder.issue(user.id, user.role)?;

    tracing::info!(user_id = %user.id, "User logged in");

    Ok(Json(ApiResponse::ok(TokenResponse { token })))
}

/// GET /me
///
/// Echoes the caller's decoded token claims. Deliberately no store read:
/// the token is the authorization artifact, so the answer reflects the
/// claims as issued, bounded by the token's TTL.
pub async fn me(auth: AuthUser) -> Json<ApiResponse<MeResponse>> {
    Json(ApiResponse::ok(MeResponse {
        id: auth.user_id,
        role: auth.role.to_string(),
    }))
}
