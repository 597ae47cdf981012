use crate::{
    abstract_trait::card::{repository::DynCardQueryRepository, service::CardQueryServiceTrait},
    domain::{
        requests::FindCards,
        responses::{ApiResponse, CardResponse},
    },
    errors::{RepositoryError, ServiceError},
    service::paginate,
};
use anyhow::Result;
use async_trait::async_trait;
use tracing::{error, info};
use uuid::Uuid;

pub struct CardQueryService {
    query: DynCardQueryRepository,
}

impl CardQueryService {
    pub async fn new(query: DynCardQueryRepository) -> Self {
        Self { query }
    }
}

#[async_trait]
impl CardQueryServiceTrait for CardQueryService {
    async fn find_all(
        &self,
        req: &FindCards,
    ) -> Result<ApiResponse<Vec<CardResponse>>, ServiceError> {
        info!(
            "🔍 Fetching cards | Page: {}, Size: {}, Alias: {:?}, Type: {:?}",
            req.page, req.size, req.card_alias, req.card_type
        );

        let card_alias = req.card_alias.as_deref().filter(|s| !s.trim().is_empty());
        let pan = req.pan.as_deref().filter(|s| !s.trim().is_empty());

        let cards = if let Some(card_alias) = card_alias {
            self.query.find_by_alias(card_alias).await
        } else if let Some(card_type) = req.card_type {
            self.query.find_by_card_type(card_type).await
        } else if let Some(pan) = pan {
            self.query.find_by_pan(pan).await
        } else {
            self.query.find_all().await
        }
        .map_err(|e| {
            error!("❌ Failed to fetch cards: {e:?}");
            ServiceError::Repo(e)
        })?;

        let page = paginate(cards, req.page, req.size);

        info!("✅ Found {} cards", page.len());

        let responses: Vec<CardResponse> = if req.unmask {
            info!("🔓 Returning unmasked card listing");
            page.iter().map(CardResponse::unmasked).collect()
        } else {
            page.iter().map(CardResponse::masked).collect()
        };

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Cards retrieved successfully".to_string(),
            data: responses,
        })
    }

    async fn find_by_id(
        &self,
        id: Uuid,
        unmask: bool,
    ) -> Result<ApiResponse<CardResponse>, ServiceError> {
        info!("🔍 Fetching card {id}");

        let card = self.query.find_by_id(id).await.map_err(|e| match e {
            RepositoryError::NotFound => ServiceError::NotFound("Card not found".to_string()),
            other => {
                error!("❌ Failed to fetch card {id}: {other:?}");
                ServiceError::Repo(other)
            }
        })?;

        let response = if unmask {
            info!("🔓 Returning unmasked card {id}");
            CardResponse::unmasked(&card)
        } else {
            CardResponse::masked(&card)
        };

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Card retrieved successfully".to_string(),
            data: response,
        })
    }

    async fn find_account_ids_by_alias(
        &self,
        card_alias: &str,
    ) -> Result<Vec<Uuid>, ServiceError> {
        info!("🔍 Resolving account ids for card alias {card_alias}");

        self.query
            .find_account_ids_by_alias(card_alias)
            .await
            .map_err(|e| {
                error!("❌ Failed to resolve alias {card_alias}: {e:?}");
                ServiceError::Repo(e)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::card::repository::MockCardQueryRepositoryTrait,
        model::card::{CardModel, CardType},
    };
    use chrono::Utc;
    use mockall::predicate::eq;
    use std::sync::Arc;

    fn card(alias: &str) -> CardModel {
        CardModel {
            id: Uuid::new_v4(),
            card_alias: alias.to_string(),
            account_id: Uuid::new_v4(),
            card_type: CardType::Virtual,
            pan: "4000001234567890".to_string(),
            cvv: "123".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn find_req() -> FindCards {
        FindCards {
            page: 0,
            size: 10,
            card_alias: None,
            card_type: None,
            pan: None,
            unmask: false,
        }
    }

    #[tokio::test]
    async fn alias_filter_takes_precedence_over_type_and_pan() {
        let mut query = MockCardQueryRepositoryTrait::new();
        query
            .expect_find_by_alias()
            .with(eq("groceries"))
            .times(1)
            .returning(|_| Ok(vec![card("groceries")]));

        let service = CardQueryService::new(Arc::new(query)).await;

        let mut req = find_req();
        req.card_alias = Some("groceries".to_string());
        req.card_type = Some(CardType::Physical);
        req.pan = Some("4000001234567890".to_string());

        let response = service.find_all(&req).await.unwrap();
        assert_eq!(response.data.len(), 1);
    }

    #[tokio::test]
    async fn type_filter_is_used_when_no_alias_is_given() {
        let mut query = MockCardQueryRepositoryTrait::new();
        query
            .expect_find_by_card_type()
            .with(eq(CardType::Physical))
            .times(1)
            .returning(|_| Ok(vec![]));

        let service = CardQueryService::new(Arc::new(query)).await;

        let mut req = find_req();
        req.card_type = Some(CardType::Physical);
        req.pan = Some("4000001234567890".to_string());

        service.find_all(&req).await.unwrap();
    }

    #[tokio::test]
    async fn listing_masks_pan_and_cvv_by_default() {
        let mut query = MockCardQueryRepositoryTrait::new();
        query
            .expect_find_all()
            .returning(|| Ok(vec![card("main")]));

        let service = CardQueryService::new(Arc::new(query)).await;

        let response = service.find_all(&find_req()).await.unwrap();
        assert_eq!(response.data[0].pan, "**** **** **** 7890");
        assert_eq!(response.data[0].cvv, "***");
    }

    #[tokio::test]
    async fn unmask_flag_applies_to_the_whole_listing() {
        let mut query = MockCardQueryRepositoryTrait::new();
        query
            .expect_find_all()
            .returning(|| Ok(vec![card("main"), card("travel")]));

        let service = CardQueryService::new(Arc::new(query)).await;

        let mut req = find_req();
        req.unmask = true;

        let response = service.find_all(&req).await.unwrap();
        for item in &response.data {
            assert_eq!(item.pan, "4000001234567890");
            assert_eq!(item.cvv, "123");
        }
    }

    #[tokio::test]
    async fn lookup_by_id_is_masked_by_default() {
        let id = Uuid::new_v4();

        let mut query = MockCardQueryRepositoryTrait::new();
        query
            .expect_find_by_id()
            .with(eq(id))
            .returning(|_| Ok(card("main")));

        let service = CardQueryService::new(Arc::new(query)).await;

        let response = service.find_by_id(id, false).await.unwrap();
        assert_eq!(response.data.pan, "**** **** **** 7890");
        assert_eq!(response.data.cvv, "***");
    }

    #[tokio::test]
    async fn unmask_returns_the_stored_pan_and_cvv() {
        let id = Uuid::new_v4();

        let mut query = MockCardQueryRepositoryTrait::new();
        query
            .expect_find_by_id()
            .with(eq(id))
            .returning(|_| Ok(card("main")));

        let service = CardQueryService::new(Arc::new(query)).await;

        let response = service.find_by_id(id, true).await.unwrap();
        assert_eq!(response.data.pan, "4000001234567890");
        assert_eq!(response.data.cvv, "123");
    }

    #[tokio::test]
    async fn missing_card_maps_to_not_found() {
        let id = Uuid::new_v4();

        let mut query = MockCardQueryRepositoryTrait::new();
        query
            .expect_find_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let service = CardQueryService::new(Arc::new(query)).await;

        let err = service.find_by_id(id, false).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(msg) if msg == "Card not found"));
    }

    #[tokio::test]
    async fn alias_resolution_returns_raw_account_ids() {
        let ids = vec![Uuid::new_v4(), Uuid::new_v4()];
        let expected = ids.clone();

        let mut query = MockCardQueryRepositoryTrait::new();
        query
            .expect_find_account_ids_by_alias()
            .with(eq("groceries"))
            .returning(move |_| Ok(ids.clone()));

        let service = CardQueryService::new(Arc::new(query)).await;

        let resolved = service.find_account_ids_by_alias("groceries").await.unwrap();
        assert_eq!(resolved, expected);
    }
}
