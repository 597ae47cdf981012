use crate::{
    domain::{
        requests::FindCustomers,
        responses::{ApiResponse, CustomerResponse},
    },
    errors::ServiceError,
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

pub type DynCustomerQueryService = Arc<dyn CustomerQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait CustomerQueryServiceTrait {
    async fn find_all(
        &self,
        req: &FindCustomers,
    ) -> Result<ApiResponse<Vec<CustomerResponse>>, ServiceError>;
    async fn find_by_id(&self, id: Uuid) -> Result<ApiResponse<CustomerResponse>, ServiceError>;
}
