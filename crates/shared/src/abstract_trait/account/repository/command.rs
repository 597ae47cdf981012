use crate::{
    domain::requests::CreateAccountRequest, errors::RepositoryError, model::account::AccountModel,
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

pub type DynAccountCommandRepository = Arc<dyn AccountCommandRepositoryTrait + Send + Sync>;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountCommandRepositoryTrait {
    async fn create(
        &self,
        request: &CreateAccountRequest,
        iban: &str,
    ) -> Result<AccountModel, RepositoryError>;
    async fn update(&self, account: &AccountModel) -> Result<AccountModel, RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
