use crate::{
    domain::requests::CreateCustomerRequest, errors::RepositoryError,
    model::customer::CustomerModel,
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

pub type DynCustomerCommandRepository = Arc<dyn CustomerCommandRepositoryTrait + Send + Sync>;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CustomerCommandRepositoryTrait {
    async fn create(&self, request: &CreateCustomerRequest)
    -> Result<CustomerModel, RepositoryError>;
    async fn update(&self, customer: &CustomerModel) -> Result<CustomerModel, RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
