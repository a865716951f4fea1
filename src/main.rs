//! Ortus Foundation Server
//!
//! Main entry point that wires all crates together and starts the server.

use tracing_subscriber::{EnvFilter, fmt};

use ortus_core::ApiError;
use ortus_core::config::AppConfig;
use ortus_database::DatabasePool;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration for the selected environment.
fn load_configuration() -> Result<AppConfig, ApiError> {
    let env = std::env::var("ORTUS_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging.
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt().with_env_filter(filter).json().init();
        }
        _ => {
            fmt().with_env_filter(filter).init();
        }
    }
}

/// Connect, migrate, and serve.
async fn run(config: AppConfig) -> Result<(), ApiError> {
    let db = DatabasePool::connect(&config.database).await?;

    ortus_database::migration::run_migrations(db.write()).await?;

    ortus_api::run_server(config, db).await
}
