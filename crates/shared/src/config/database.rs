use anyhow::{Context, Result};
use sqlx::{Pool, Postgres, postgres::PgPoolOptions};
use std::time::Duration;
use tracing::{info, warn};

pub type ConnectionPool = Pool<Postgres>;

pub struct ConnectionManager;

impl ConnectionManager {
    pub async fn new_pool(database_url: &str, run_migrations: bool) -> Result<ConnectionPool> {
        let mut attempt = 1;

        let pool = loop {
            let result = PgPoolOptions::new()
                .max_connections(10)
                .acquire_timeout(Duration::from_secs(5))
                .connect(database_url)
                .await;

            match result {
                Ok(pool) => break pool,
                Err(e) if attempt < 5 => {
                    warn!("⚠️  Database connection attempt {attempt} failed: {e}. Retrying in 2s...");
                    attempt += 1;
                    tokio::time::sleep(Duration::from_secs(2)).await;
                }
                Err(e) => {
                    return Err(e).context("Failed to connect to database after 5 attempts");
                }
            }
        };

        info!("✅ Database connection established");

        if run_migrations {
            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .context("Failed to run database migrations")?;
            info!("✅ Database migrations applied");
        }

        Ok(pool)
    }
}
