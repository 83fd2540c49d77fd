use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use forsa_backend::config::Settings;
use forsa_backend::server;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Load configuration from environment
    let settings = Settings::from_env()?;

    // Initialize logging; RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!(
        "Starting {} v{} ({})",
        settings.app_name, settings.app_version, settings.environment
    );

    server::serve(Arc::new(settings)).await
}
