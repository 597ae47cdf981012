use crate::{
    domain::requests::CreateCardRequest, errors::RepositoryError, model::card::CardModel,
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

pub type DynCardCommandRepository = Arc<dyn CardCommandRepositoryTrait + Send + Sync>;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CardCommandRepositoryTrait {
    async fn create(
        &self,
        request: &CreateCardRequest,
        pan: &str,
        cvv: &str,
    ) -> Result<CardModel, RepositoryError>;
    async fn update_alias(&self, id: Uuid, card_alias: &str)
    -> Result<CardModel, RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
