//! FieldHub Server: field-service job scheduling backend.
//!
//! Main entry point that loads configuration, connects to PostgreSQL, and
//! serves the HTTP API. Migrations are applied separately with
//! `fieldhub-cli migrate run`.

use fieldhub_core::config::AppConfig;
use fieldhub_core::error::AppError;
use fieldhub_database::DatabasePool;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    fieldhub_api::init_logging(&config.logging);

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }
}

/// Load configuration from file, environment overlay, and variables.
fn load_configuration() -> Result<AppConfig, AppError> {
    let config_path =
        std::env::var("FIELDHUB_CONFIG").unwrap_or_else(|_| "config/default.toml".to_string());
    let env = std::env::var("FIELDHUB_ENV").unwrap_or_else(|_| "development".to_string());

    AppConfig::load(&config_path, &env)
}

/// Connect and serve until shutdown.
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting FieldHub");

    let db = DatabasePool::connect(&config.database).await?;
    fieldhub_api::run_server(config, db).await
}
