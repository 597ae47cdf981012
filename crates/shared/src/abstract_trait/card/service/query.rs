use crate::{
    domain::{
        requests::FindCards,
        responses::{ApiResponse, CardResponse},
    },
    errors::ServiceError,
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

pub type DynCardQueryService = Arc<dyn CardQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait CardQueryServiceTrait {
    async fn find_all(&self, req: &FindCards)
    -> Result<ApiResponse<Vec<CardResponse>>, ServiceError>;
    async fn find_by_id(
        &self,
        id: Uuid,
        unmask: bool,
    ) -> Result<ApiResponse<CardResponse>, ServiceError>;
    async fn find_account_ids_by_alias(&self, card_alias: &str)
    -> Result<Vec<Uuid>, ServiceError>;
}
