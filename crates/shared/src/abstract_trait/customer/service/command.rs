use crate::{
    domain::{
        requests::{CreateCustomerRequest, UpdateCustomerRequest},
        responses::{ApiResponse, CustomerResponse},
    },
    errors::ServiceError,
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

pub type DynCustomerCommandService = Arc<dyn CustomerCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait CustomerCommandServiceTrait {
    async fn create(
        &self,
        req: &CreateCustomerRequest,
    ) -> Result<ApiResponse<CustomerResponse>, ServiceError>;
    async fn update(
        &self,
        id: Uuid,
        req: &UpdateCustomerRequest,
    ) -> Result<ApiResponse<CustomerResponse>, ServiceError>;
    async fn delete(&self, id: Uuid) -> Result<ApiResponse<()>, ServiceError>;
}
