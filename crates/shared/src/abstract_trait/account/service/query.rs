use crate::{
    domain::{
        requests::FindAccounts,
        responses::{AccountResponse, ApiResponse},
    },
    errors::ServiceError,
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

pub type DynAccountQueryService = Arc<dyn AccountQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait AccountQueryServiceTrait {
    async fn find_all(
        &self,
        req: &FindAccounts,
    ) -> Result<ApiResponse<Vec<AccountResponse>>, ServiceError>;
    async fn find_by_id(&self, id: Uuid) -> Result<ApiResponse<AccountResponse>, ServiceError>;
}
