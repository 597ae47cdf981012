use crate::{errors::RepositoryError, model::account::AccountModel};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

pub type DynAccountQueryRepository = Arc<dyn AccountQueryRepositoryTrait + Send + Sync>;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountQueryRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<AccountModel>, RepositoryError>;
    async fn find_by_id(&self, id: Uuid) -> Result<AccountModel, RepositoryError>;
    async fn exists_by_id(&self, id: Uuid) -> Result<bool, RepositoryError>;
    async fn exists_by_iban(&self, iban: &str) -> Result<bool, RepositoryError>;
    async fn find_by_iban(&self, iban: &str) -> Result<Vec<AccountModel>, RepositoryError>;
    async fn find_by_bic_swift(&self, bic_swift: &str)
    -> Result<Vec<AccountModel>, RepositoryError>;
    async fn find_by_id_in(&self, ids: &[Uuid]) -> Result<Vec<AccountModel>, RepositoryError>;
}
