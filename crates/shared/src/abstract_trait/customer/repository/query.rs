use crate::{errors::RepositoryError, model::customer::CustomerModel};
use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Arc;
use uuid::Uuid;

pub type DynCustomerQueryRepository = Arc<dyn CustomerQueryRepositoryTrait + Send + Sync>;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CustomerQueryRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<CustomerModel>, RepositoryError>;
    async fn find_by_id(&self, id: Uuid) -> Result<CustomerModel, RepositoryError>;
    async fn exists_by_id(&self, id: Uuid) -> Result<bool, RepositoryError>;
    async fn search_by_full_name(&self, name: &str)
    -> Result<Vec<CustomerModel>, RepositoryError>;
    async fn find_by_created_at_between(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<CustomerModel>, RepositoryError>;
}
