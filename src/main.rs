//! Userbase server — a minimal user-account HTTP API.
//!
//! Main entry point: loads configuration, initializes logging, connects the
//! database, runs migrations, and starts the HTTP server.

use tracing_subscriber::{EnvFilter, fmt};

use userbase_core::config::AppConfig;
use userbase_core::error::AppError;

#[tokio::main]
async fn main() {
    let env = std::env::var("USERBASE_ENV").unwrap_or_else(|_| "development".to_string());

    // A missing or empty JWT secret fails here, before anything binds.
    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt().json().with_env_filter(filter).with_target(true).init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Userbase v{}", env!("CARGO_PKG_VERSION"));

    let pool = userbase_database::connection::connect(&config.database).await?;
    userbase_database::migration::run_migrations(&pool).await?;

    userbase_api::run_server(config, pool).await
}
