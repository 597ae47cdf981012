use crate::{
    abstract_trait::{
        card::{
            repository::{DynCardCommandRepository, DynCardQueryRepository},
            service::CardCommandServiceTrait,
        },
        client::DynAccountExistenceClient,
    },
    domain::{
        requests::{CreateCardRequest, UpdateCardRequest},
        responses::{ApiResponse, CardResponse},
    },
    errors::{RepositoryError, ServiceError, format_validation_errors},
    utils::{random_cvv, random_pan},
};
use anyhow::Result;
use async_trait::async_trait;
use tracing::{error, info};
use uuid::Uuid;
use validator::Validate;

const MAX_CARDS_PER_ACCOUNT: i64 = 2;

pub struct CardCommandService {
    query: DynCardQueryRepository,
    command: DynCardCommandRepository,
    account_client: DynAccountExistenceClient,
}

impl CardCommandService {
    pub async fn new(
        query: DynCardQueryRepository,
        command: DynCardCommandRepository,
        account_client: DynAccountExistenceClient,
    ) -> Self {
        Self {
            query,
            command,
            account_client,
        }
    }

    async fn ensure_account_exists(&self, account_id: Uuid) -> Result<(), ServiceError> {
        let exists = self
            .account_client
            .exists_by_id(account_id)
            .await
            .map_err(|e| {
                error!("❌ Account issuer probe failed for {account_id}: {e:?}");
                ServiceError::Client(e)
            })?;

        if !exists {
            return Err(ServiceError::AccountNotFound);
        }

        Ok(())
    }

    fn map_conflict(constraint: &str) -> ServiceError {
        if constraint.contains("uq_cards_account_alias") {
            ServiceError::DuplicateAlias
        } else if constraint.contains("uq_cards_account_type") {
            ServiceError::DuplicateCardType
        } else {
            ServiceError::DuplicateResource("Card already exists".to_string())
        }
    }
}

#[async_trait]
impl CardCommandServiceTrait for CardCommandService {
    async fn create(
        &self,
        req: &CreateCardRequest,
    ) -> Result<ApiResponse<CardResponse>, ServiceError> {
        if let Err(validation_errors) = req.validate() {
            let error_msg = format_validation_errors(&validation_errors);
            error!("Validation failed: {error_msg}");
            return Err(ServiceError::Validation(error_msg));
        }

        info!(
            "🆕 Creating {} card for account {}",
            req.card_type, req.account_id
        );

        self.ensure_account_exists(req.account_id).await?;

        let issued = self
            .query
            .count_by_account_id(req.account_id)
            .await
            .map_err(ServiceError::Repo)?;
        if issued >= MAX_CARDS_PER_ACCOUNT {
            return Err(ServiceError::CardLimitExceeded);
        }

        let type_taken = self
            .query
            .exists_by_account_id_and_card_type(req.account_id, req.card_type)
            .await
            .map_err(ServiceError::Repo)?;
        if type_taken {
            return Err(ServiceError::DuplicateCardType);
        }

        let pan = random_pan();
        let cvv = random_cvv();

        let card = self
            .command
            .create(req, &pan, &cvv)
            .await
            .map_err(|e| match e {
                RepositoryError::AlreadyExists(constraint) => Self::map_conflict(&constraint),
                other => {
                    error!("💥 Failed to create card: {other:?}");
                    ServiceError::Repo(other)
                }
            })?;

        let response = CardResponse::masked(&card);

        info!("✅ Card created successfully with id={}", card.id);

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Card created successfully".to_string(),
            data: response,
        })
    }

    async fn update_alias(
        &self,
        id: Uuid,
        req: &UpdateCardRequest,
    ) -> Result<ApiResponse<CardResponse>, ServiceError> {
        if let Err(validation_errors) = req.validate() {
            let error_msg = format_validation_errors(&validation_errors);
            error!("Validation failed: {error_msg}");
            return Err(ServiceError::Validation(error_msg));
        }

        info!("🔄 Renaming card id={id} to alias {}", req.card_alias);

        let card = self.query.find_by_id(id).await.map_err(|e| match e {
            RepositoryError::NotFound => ServiceError::NotFound("Card not found".to_string()),
            other => ServiceError::Repo(other),
        })?;

        let alias_taken = self
            .query
            .exists_alias_on_account_excluding(card.account_id, &req.card_alias, id)
            .await
            .map_err(ServiceError::Repo)?;
        if alias_taken {
            return Err(ServiceError::DuplicateAlias);
        }

        let updated = self
            .command
            .update_alias(id, &req.card_alias)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ServiceError::NotFound("Card not found".to_string()),
                RepositoryError::AlreadyExists(constraint) => Self::map_conflict(&constraint),
                other => {
                    error!("💥 Failed to rename card id={id}: {other:?}");
                    ServiceError::Repo(other)
                }
            })?;

        info!("✅ Card renamed successfully with id={id}");

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Card updated successfully".to_string(),
            data: CardResponse::masked(&updated),
        })
    }

    async fn delete(&self, id: Uuid) -> Result<ApiResponse<()>, ServiceError> {
        info!("🗑️ Deleting card id={id}");

        let exists = self.query.exists_by_id(id).await.map_err(ServiceError::Repo)?;
        if !exists {
            return Err(ServiceError::NotFound("Card not found".to_string()));
        }

        self.command.delete(id).await.map_err(|e| match e {
            RepositoryError::NotFound => ServiceError::NotFound("Card not found".to_string()),
            other => {
                error!("💥 Failed to delete card id={id}: {other:?}");
                ServiceError::Repo(other)
            }
        })?;

        info!("✅ Card deleted successfully with id={id}");

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Card deleted successfully".to_string(),
            data: (),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::{
            card::repository::{MockCardCommandRepositoryTrait, MockCardQueryRepositoryTrait},
            client::MockAccountExistenceClientTrait,
        },
        model::card::{CardModel, CardType},
    };
    use chrono::Utc;
    use mockall::predicate::eq;
    use std::sync::Arc;

    fn stored_card(id: Uuid, account_id: Uuid, alias: &str) -> CardModel {
        CardModel {
            id,
            card_alias: alias.to_string(),
            account_id,
            card_type: CardType::Virtual,
            pan: "4000001234567890".to_string(),
            cvv: "123".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn create_req(account_id: Uuid) -> CreateCardRequest {
        CreateCardRequest {
            card_alias: "groceries".to_string(),
            account_id,
            card_type: CardType::Virtual,
        }
    }

    async fn service(
        query: MockCardQueryRepositoryTrait,
        command: MockCardCommandRepositoryTrait,
        account_client: MockAccountExistenceClientTrait,
    ) -> CardCommandService {
        CardCommandService::new(Arc::new(query), Arc::new(command), Arc::new(account_client))
            .await
    }

    #[tokio::test]
    async fn create_rejects_an_account_the_issuer_does_not_know() {
        let account_id = Uuid::new_v4();

        let mut account_client = MockAccountExistenceClientTrait::new();
        account_client
            .expect_exists_by_id()
            .with(eq(account_id))
            .returning(|_| Ok(false));

        let query = MockCardQueryRepositoryTrait::new();
        let command = MockCardCommandRepositoryTrait::new();

        let service = service(query, command, account_client).await;

        let err = service.create(&create_req(account_id)).await.unwrap_err();
        assert!(matches!(err, ServiceError::AccountNotFound));
    }

    #[tokio::test]
    async fn create_enforces_the_two_card_limit() {
        let account_id = Uuid::new_v4();

        let mut account_client = MockAccountExistenceClientTrait::new();
        account_client.expect_exists_by_id().returning(|_| Ok(true));

        let mut query = MockCardQueryRepositoryTrait::new();
        query
            .expect_count_by_account_id()
            .with(eq(account_id))
            .returning(|_| Ok(2));

        let command = MockCardCommandRepositoryTrait::new();

        let service = service(query, command, account_client).await;

        let err = service.create(&create_req(account_id)).await.unwrap_err();
        assert!(matches!(err, ServiceError::CardLimitExceeded));
    }

    #[tokio::test]
    async fn create_rejects_a_second_card_of_the_same_type() {
        let account_id = Uuid::new_v4();

        let mut account_client = MockAccountExistenceClientTrait::new();
        account_client.expect_exists_by_id().returning(|_| Ok(true));

        let mut query = MockCardQueryRepositoryTrait::new();
        query.expect_count_by_account_id().returning(|_| Ok(1));
        query
            .expect_exists_by_account_id_and_card_type()
            .with(eq(account_id), eq(CardType::Virtual))
            .returning(|_, _| Ok(true));

        let command = MockCardCommandRepositoryTrait::new();

        let service = service(query, command, account_client).await;

        let err = service.create(&create_req(account_id)).await.unwrap_err();
        assert!(matches!(err, ServiceError::DuplicateCardType));
    }

    #[tokio::test]
    async fn create_generates_pan_and_cvv_and_returns_them_masked() {
        let account_id = Uuid::new_v4();

        let mut account_client = MockAccountExistenceClientTrait::new();
        account_client.expect_exists_by_id().returning(|_| Ok(true));

        let mut query = MockCardQueryRepositoryTrait::new();
        query.expect_count_by_account_id().returning(|_| Ok(0));
        query
            .expect_exists_by_account_id_and_card_type()
            .returning(|_, _| Ok(false));

        let mut command = MockCardCommandRepositoryTrait::new();
        command
            .expect_create()
            .withf(|_, pan, cvv| {
                pan.len() == 16
                    && pan.starts_with("400000")
                    && pan.chars().all(|c| c.is_ascii_digit())
                    && cvv.len() == 3
                    && cvv.chars().all(|c| c.is_ascii_digit())
            })
            .times(1)
            .returning(|req, pan, cvv| {
                let mut card = stored_card(Uuid::new_v4(), req.account_id, &req.card_alias);
                card.card_type = req.card_type;
                card.pan = pan.to_string();
                card.cvv = cvv.to_string();
                Ok(card)
            });

        let service = service(query, command, account_client).await;

        let response = service.create(&create_req(account_id)).await.unwrap();
        assert!(response.data.pan.starts_with("**** **** **** "));
        assert_eq!(response.data.cvv, "***");
    }

    #[tokio::test]
    async fn create_maps_an_alias_race_to_a_conflict() {
        let account_id = Uuid::new_v4();

        let mut account_client = MockAccountExistenceClientTrait::new();
        account_client.expect_exists_by_id().returning(|_| Ok(true));

        let mut query = MockCardQueryRepositoryTrait::new();
        query.expect_count_by_account_id().returning(|_| Ok(0));
        query
            .expect_exists_by_account_id_and_card_type()
            .returning(|_, _| Ok(false));

        let mut command = MockCardCommandRepositoryTrait::new();
        command.expect_create().returning(|_, _, _| {
            Err(RepositoryError::AlreadyExists(
                "Unique constraint violated: uq_cards_account_alias".to_string(),
            ))
        });

        let service = service(query, command, account_client).await;

        let err = service.create(&create_req(account_id)).await.unwrap_err();
        assert!(matches!(err, ServiceError::DuplicateAlias));
    }

    #[tokio::test]
    async fn rename_rejects_an_alias_used_by_a_sibling_card() {
        let id = Uuid::new_v4();
        let account_id = Uuid::new_v4();

        let mut query = MockCardQueryRepositoryTrait::new();
        query
            .expect_find_by_id()
            .with(eq(id))
            .returning(move |_| Ok(stored_card(id, account_id, "main")));
        query
            .expect_exists_alias_on_account_excluding()
            .with(eq(account_id), eq("groceries"), eq(id))
            .returning(|_, _, _| Ok(true));

        let command = MockCardCommandRepositoryTrait::new();
        let account_client = MockAccountExistenceClientTrait::new();

        let service = service(query, command, account_client).await;

        let req = UpdateCardRequest {
            card_alias: "groceries".to_string(),
        };

        let err = service.update_alias(id, &req).await.unwrap_err();
        assert!(matches!(err, ServiceError::DuplicateAlias));
    }

    #[tokio::test]
    async fn rename_to_its_own_alias_is_allowed() {
        let id = Uuid::new_v4();
        let account_id = Uuid::new_v4();

        let mut query = MockCardQueryRepositoryTrait::new();
        query
            .expect_find_by_id()
            .returning(move |_| Ok(stored_card(id, account_id, "main")));
        query
            .expect_exists_alias_on_account_excluding()
            .returning(|_, _, _| Ok(false));

        let mut command = MockCardCommandRepositoryTrait::new();
        command
            .expect_update_alias()
            .with(eq(id), eq("main"))
            .times(1)
            .returning(move |card_id, alias| Ok(stored_card(card_id, account_id, alias)));

        let account_client = MockAccountExistenceClientTrait::new();

        let service = service(query, command, account_client).await;

        let req = UpdateCardRequest {
            card_alias: "main".to_string(),
        };

        let response = service.update_alias(id, &req).await.unwrap();
        assert_eq!(response.data.card_alias, "main");
    }

    #[tokio::test]
    async fn delete_of_a_missing_card_is_not_found() {
        let id = Uuid::new_v4();

        let mut query = MockCardQueryRepositoryTrait::new();
        query
            .expect_exists_by_id()
            .with(eq(id))
            .returning(|_| Ok(false));

        let command = MockCardCommandRepositoryTrait::new();
        let account_client = MockAccountExistenceClientTrait::new();

        let service = service(query, command, account_client).await;

        let err = service.delete(id).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }
}
