use anyhow::{Context, Result, anyhow};

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub run_migrations: bool,
    pub port: Option<u16>,
}

impl Config {
    pub fn init() -> Result<Self> {
        let database_url = std::env::var("DATABASE_URL").context("Missing env: DATABASE_URL")?;
        let run_migrations_str =
            std::env::var("RUN_MIGRATIONS").context("Missing env: RUN_MIGRATIONS")?;

        let run_migrations = match run_migrations_str.as_str() {
            "true" => true,
            "false" => false,
            other => {
                return Err(anyhow!(
                    "RUN_MIGRATIONS must be 'true' or 'false', got '{other}'",
                ));
            }
        };

        let port = match std::env::var("PORT") {
            Ok(value) => Some(
                value
                    .parse::<u16>()
                    .context("PORT must be a valid u16 integer")?,
            ),
            Err(_) => None,
        };

        Ok(Self {
            database_url,
            run_migrations,
            port,
        })
    }
}
