use anyhow::Result;
use shared::config::Config;

const DEFAULT_PORT: u16 = 9000;

pub struct ServerConfig {
    pub port: u16,
    pub database_url: String,
    pub run_migrations: bool,
}

impl ServerConfig {
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self {
            port: config.port.unwrap_or(DEFAULT_PORT),
            database_url: config.database_url.clone(),
            run_migrations: config.run_migrations,
        })
    }
}
