use crate::errors::ClientError;
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

pub type DynCustomerExistenceClient = Arc<dyn CustomerExistenceClientTrait + Send + Sync>;

/// Probe against the customer registry, used before issuing an account.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CustomerExistenceClientTrait {
    async fn exists_by_id(&self, id: Uuid) -> Result<bool, ClientError>;
}

pub type DynAccountExistenceClient = Arc<dyn AccountExistenceClientTrait + Send + Sync>;

/// Probe against the account issuer, used before vaulting a card.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountExistenceClientTrait {
    async fn exists_by_id(&self, id: Uuid) -> Result<bool, ClientError>;
}

pub type DynCardAliasClient = Arc<dyn CardAliasClientTrait + Send + Sync>;

/// Resolves card aliases to account ids through the card vault.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CardAliasClientTrait {
    async fn account_ids_by_alias(&self, card_alias: &str) -> Result<Vec<Uuid>, ClientError>;
}
