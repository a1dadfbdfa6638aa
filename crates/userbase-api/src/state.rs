//! Application state shared across all handlers and extractors.

use std::sync::Arc;

use sqlx::PgPool;

use userbase_auth::jwt::decoder::TokenDecoder;
use userbase_auth::jwt::encoder::TokenEncoder;
use userbase_auth::password::hasher::PasswordHasher;
use userbase_core::config::AppConfig;
use userbase_database::repositories::user::UserRepository;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool.
    pub db_pool: PgPool,
    /// JWT token encoder.
    pub token_encoder: Arc<TokenEncoder>,
    /// JWT token decoder and validator.
    pub token_decoder: Arc<TokenDecoder>,
    /// Password hasher (Argon2).
    pub password_hasher: Arc<PasswordHasher>,
    /// User repository.
    pub user_repo: Arc<UserRepository>,
}

impl AppState {
    /// Build the full application state from configuration and a pool.
    pub fn new(config: AppConfig, db_pool: PgPool) -> Self {
        let token_encoder = Arc::new(TokenEncoder::new(&config.auth));
        let token_decoder = Arc::new(TokenDecoder::new(&config.auth));
        let password_hasher = Arc::new(PasswordHasher::new());
        let user_repo = Arc::new(UserRepository::new(db_pool.clone()));

        Self {
            config: Arc::new(config),
            db_pool,
            token_encoder,
            token_decoder,
            password_hasher,
            user_repo,
        }
    }
}
