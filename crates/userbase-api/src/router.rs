//! Route definitions for the Userbase HTTP API.
//!
//! The router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor. Register and login are the only open routes; the rest
//! pass through the access gate (`AuthUser` extractor), and the update,
//! delete, and list routes additionally require the admin role.

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router with all routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/register", post(handlers::auth::register))
        .route("/login", post(handlers::auth::login))
        .route("/me", get(handlers::auth::me))
        .route("/{id}", put(handlers::users::update_user))
        .route("/{id}", delete(handlers::users::delete_user))
        .route("/", get(handlers::users::list_users))
        .with_state(state)
}
