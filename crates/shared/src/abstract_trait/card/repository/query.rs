use crate::{
    errors::RepositoryError,
    model::card::{CardModel, CardType},
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

pub type DynCardQueryRepository = Arc<dyn CardQueryRepositoryTrait + Send + Sync>;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CardQueryRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<CardModel>, RepositoryError>;
    async fn find_by_id(&self, id: Uuid) -> Result<CardModel, RepositoryError>;
    async fn exists_by_id(&self, id: Uuid) -> Result<bool, RepositoryError>;
    async fn find_by_alias(&self, card_alias: &str) -> Result<Vec<CardModel>, RepositoryError>;
    async fn find_by_card_type(&self, card_type: CardType)
    -> Result<Vec<CardModel>, RepositoryError>;
    async fn find_by_pan(&self, pan: &str) -> Result<Vec<CardModel>, RepositoryError>;
    async fn count_by_account_id(&self, account_id: Uuid) -> Result<i64, RepositoryError>;
    async fn exists_by_account_id_and_card_type(
        &self,
        account_id: Uuid,
        card_type: CardType,
    ) -> Result<bool, RepositoryError>;
    async fn exists_alias_on_account_excluding(
        &self,
        account_id: Uuid,
        card_alias: &str,
        exclude_id: Uuid,
    ) -> Result<bool, RepositoryError>;
    async fn find_account_ids_by_alias(&self, card_alias: &str)
    -> Result<Vec<Uuid>, RepositoryError>;
}
