mod account;
mod card;
mod customer;

pub use self::account::AccountExistenceClient;
pub use self::card::CardAliasClient;
pub use self::customer::CustomerExistenceClient;

use anyhow::{Context, Result};
use std::time::Duration;

/// Builds the process-wide HTTP client used by every collaborator client.
pub fn build_http_client() -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(5))
        .timeout(Duration::from_secs(10))
        .build()
        .context("Failed to build HTTP client")
}
