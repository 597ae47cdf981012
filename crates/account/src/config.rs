use anyhow::{Context, Result};
use shared::config::Config;

const DEFAULT_PORT: u16 = 9001;

pub struct ServerConfig {
    pub port: u16,
    pub database_url: String,
    pub run_migrations: bool,
    pub customer_service_url: String,
    pub card_service_url: String,
}

impl ServerConfig {
    pub fn from_config(config: &Config) -> Result<Self> {
        let customer_service_url = std::env::var("CUSTOMER_SERVICE_URL")
            .context("Missing environment variable: CUSTOMER_SERVICE_URL")?;

        let card_service_url = std::env::var("CARD_SERVICE_URL")
            .context("Missing environment variable: CARD_SERVICE_URL")?;

        Ok(Self {
            port: config.port.unwrap_or(DEFAULT_PORT),
            database_url: config.database_url.clone(),
            run_migrations: config.run_migrations,
            customer_service_url,
            card_service_url,
        })
    }
}
