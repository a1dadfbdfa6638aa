//! # userbase-api
//!
//! HTTP API layer for Userbase built on Axum.
//!
//! Provides the REST endpoints, the access gate (`AuthUser` extractor +
//! `require_admin`), and the request/response DTOs.

pub mod app;
pub mod dto;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use state::AppState;
