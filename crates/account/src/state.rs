use crate::{config::ServerConfig, di::DependenciesInject};
use anyhow::{Context, Result};
use shared::config::ConnectionPool;

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
}

impl AppState {
    pub async fn new(db_pool: ConnectionPool, server_config: &ServerConfig) -> Result<Self> {
        let di_container = DependenciesInject::new(
            db_pool,
            server_config.customer_service_url.clone(),
            server_config.card_service_url.clone(),
        )
        .await
        .context("Failed to initialize dependency injection container")?;

        Ok(Self { di_container })
    }
}
