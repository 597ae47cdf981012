use anyhow::{Context, Result};
use customer::{config::ServerConfig, handler::AppRouter, state::AppState};
use shared::{
    config::{Config, ConnectionManager},
    utils::Logger,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let is_dev = std::env::var("DEV_MODE")
        .map(|v| v == "true" || v == "1")
        .unwrap_or(false);

    let _logger = Logger::new("customer-service", is_dev);

    let config = Config::init().context("Failed to load configuration")?;

    let server_config = ServerConfig::from_config(&config)?;

    let db_pool =
        ConnectionManager::new_pool(&server_config.database_url, server_config.run_migrations)
            .await
            .context("Failed to initialize database pool")?;

    let state = AppState::new(db_pool)
        .await
        .context("Failed to create AppState")?;

    AppRouter::serve(server_config.port, state)
        .await
        .context("Failed to start server")?;

    info!("✅ Customer Service shutdown complete.");

    Ok(())
}
