use crate::{
    domain::{
        requests::{CreateAccountRequest, UpdateAccountRequest},
        responses::{AccountResponse, ApiResponse},
    },
    errors::ServiceError,
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

pub type DynAccountCommandService = Arc<dyn AccountCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait AccountCommandServiceTrait {
    async fn create(
        &self,
        req: &CreateAccountRequest,
    ) -> Result<ApiResponse<AccountResponse>, ServiceError>;
    async fn update(
        &self,
        id: Uuid,
        req: &UpdateAccountRequest,
    ) -> Result<ApiResponse<AccountResponse>, ServiceError>;
    async fn delete(&self, id: Uuid) -> Result<ApiResponse<()>, ServiceError>;
}
