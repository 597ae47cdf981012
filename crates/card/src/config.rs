use anyhow::{Context, Result};
use shared::config::Config;

const DEFAULT_PORT: u16 = 9002;

pub struct ServerConfig {
    pub port: u16,
    pub database_url: String,
    pub run_migrations: bool,
    pub account_service_url: String,
}

impl ServerConfig {
    pub fn from_config(config: &Config) -> Result<Self> {
        let account_service_url = std::env::var("ACCOUNT_SERVICE_URL")
            .context("Missing environment variable: ACCOUNT_SERVICE_URL")?;

        Ok(Self {
            port: config.port.unwrap_or(DEFAULT_PORT),
            database_url: config.database_url.clone(),
            run_migrations: config.run_migrations,
            account_service_url,
        })
    }
}
