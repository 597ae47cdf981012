use crate::{
    abstract_trait::{
        account::{
            repository::{DynAccountCommandRepository, DynAccountQueryRepository},
            service::AccountCommandServiceTrait,
        },
        client::DynCustomerExistenceClient,
    },
    domain::{
        requests::{CreateAccountRequest, UpdateAccountRequest},
        responses::{AccountResponse, ApiResponse},
    },
    errors::{RepositoryError, ServiceError, format_validation_errors},
    utils::random_iban,
};
use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use tracing::{error, info, warn};
use uuid::Uuid;
use validator::Validate;

const MAX_IBAN_ATTEMPTS: usize = 5;

pub struct AccountCommandService {
    query: DynAccountQueryRepository,
    command: DynAccountCommandRepository,
    customer_client: DynCustomerExistenceClient,
}

impl AccountCommandService {
    pub async fn new(
        query: DynAccountQueryRepository,
        command: DynAccountCommandRepository,
        customer_client: DynCustomerExistenceClient,
    ) -> Self {
        Self {
            query,
            command,
            customer_client,
        }
    }

    async fn ensure_customer_exists(&self, customer_id: Uuid) -> Result<(), ServiceError> {
        let exists = self
            .customer_client
            .exists_by_id(customer_id)
            .await
            .map_err(|e| {
                error!("❌ Customer registry probe failed for {customer_id}: {e:?}");
                ServiceError::Client(e)
            })?;

        if !exists {
            return Err(ServiceError::CustomerNotFound);
        }

        Ok(())
    }

    async fn generate_unused_iban(&self) -> Result<String, ServiceError> {
        for attempt in 1..=MAX_IBAN_ATTEMPTS {
            let candidate = random_iban();
            let taken = self
                .query
                .exists_by_iban(&candidate)
                .await
                .map_err(ServiceError::Repo)?;

            if !taken {
                return Ok(candidate);
            }

            warn!("⚠️ Generated IBAN already taken, retrying (attempt {attempt})");
        }

        Err(ServiceError::DuplicateResource(
            "IBAN already exists".to_string(),
        ))
    }
}

#[async_trait]
impl AccountCommandServiceTrait for AccountCommandService {
    async fn create(
        &self,
        req: &CreateAccountRequest,
    ) -> Result<ApiResponse<AccountResponse>, ServiceError> {
        if let Err(validation_errors) = req.validate() {
            let error_msg = format_validation_errors(&validation_errors);
            error!("Validation failed: {error_msg}");
            return Err(ServiceError::Validation(error_msg));
        }

        info!("🆕 Creating account for customer {}", req.customer_id);

        self.ensure_customer_exists(req.customer_id).await?;

        let iban = self.generate_unused_iban().await?;

        let account = self.command.create(req, &iban).await.map_err(|e| match e {
            RepositoryError::AlreadyExists(_) => {
                ServiceError::DuplicateResource("IBAN already exists".to_string())
            }
            other => {
                error!("💥 Failed to create account: {other:?}");
                ServiceError::Repo(other)
            }
        })?;

        let response = AccountResponse::from(account);

        info!("✅ Account created successfully with id={}", response.id);

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Account created successfully".to_string(),
            data: response,
        })
    }

    async fn update(
        &self,
        id: Uuid,
        req: &UpdateAccountRequest,
    ) -> Result<ApiResponse<AccountResponse>, ServiceError> {
        if let Err(validation_errors) = req.validate() {
            let error_msg = format_validation_errors(&validation_errors);
            error!("Validation failed: {error_msg}");
            return Err(ServiceError::Validation(error_msg));
        }

        info!("🔄 Updating account id={id}");

        let mut account = self.query.find_by_id(id).await.map_err(|e| match e {
            RepositoryError::NotFound => ServiceError::NotFound("Account not found".to_string()),
            other => ServiceError::Repo(other),
        })?;

        if let Some(customer_id) = req.customer_id {
            if customer_id != account.customer_id {
                self.ensure_customer_exists(customer_id).await?;
                account.customer_id = customer_id;
            }
        }

        if let Some(bic_swift) = &req.bic_swift {
            let trimmed = bic_swift.trim();
            if !trimmed.is_empty() {
                account.bic_swift = trimmed.to_string();
            }
        }

        account.updated_at = Utc::now();

        let updated = self.command.update(&account).await.map_err(|e| match e {
            RepositoryError::NotFound => ServiceError::NotFound("Account not found".to_string()),
            other => {
                error!("💥 Failed to update account id={id}: {other:?}");
                ServiceError::Repo(other)
            }
        })?;

        info!("✅ Account updated successfully with id={id}");

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Account updated successfully".to_string(),
            data: updated.into(),
        })
    }

    async fn delete(&self, id: Uuid) -> Result<ApiResponse<()>, ServiceError> {
        info!("🗑️ Deleting account id={id}");

        let exists = self.query.exists_by_id(id).await.map_err(ServiceError::Repo)?;
        if !exists {
            return Err(ServiceError::NotFound("Account not found".to_string()));
        }

        self.command.delete(id).await.map_err(|e| match e {
            RepositoryError::NotFound => ServiceError::NotFound("Account not found".to_string()),
            other => {
                error!("💥 Failed to delete account id={id}: {other:?}");
                ServiceError::Repo(other)
            }
        })?;

        info!("✅ Account deleted successfully with id={id}");

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Account deleted successfully".to_string(),
            data: (),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::{
            account::repository::{
                MockAccountCommandRepositoryTrait, MockAccountQueryRepositoryTrait,
            },
            client::MockCustomerExistenceClientTrait,
        },
        model::account::AccountModel,
    };
    use mockall::{Sequence, predicate::eq};
    use std::sync::Arc;

    fn existing_account(id: Uuid, customer_id: Uuid) -> AccountModel {
        AccountModel {
            id,
            iban: "KE11AAAAAAAAAAAAAAAAAA".to_string(),
            bic_swift: "KCBLKENX".to_string(),
            customer_id,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    async fn service(
        query: MockAccountQueryRepositoryTrait,
        command: MockAccountCommandRepositoryTrait,
        customer_client: MockCustomerExistenceClientTrait,
    ) -> AccountCommandService {
        AccountCommandService::new(Arc::new(query), Arc::new(command), Arc::new(customer_client))
            .await
    }

    #[tokio::test]
    async fn create_rejects_a_customer_the_registry_does_not_know() {
        let customer_id = Uuid::new_v4();

        let mut customer_client = MockCustomerExistenceClientTrait::new();
        customer_client
            .expect_exists_by_id()
            .with(eq(customer_id))
            .returning(|_| Ok(false));

        let query = MockAccountQueryRepositoryTrait::new();
        let command = MockAccountCommandRepositoryTrait::new();

        let service = service(query, command, customer_client).await;

        let req = CreateAccountRequest {
            customer_id,
            bic_swift: "KCBLKENX".to_string(),
        };

        let err = service.create(&req).await.unwrap_err();
        assert!(matches!(err, ServiceError::CustomerNotFound));
    }

    #[tokio::test]
    async fn create_rejects_a_missing_bic_swift() {
        let query = MockAccountQueryRepositoryTrait::new();
        let command = MockAccountCommandRepositoryTrait::new();
        let customer_client = MockCustomerExistenceClientTrait::new();

        let service = service(query, command, customer_client).await;

        let req = CreateAccountRequest {
            customer_id: Uuid::new_v4(),
            bic_swift: String::new(),
        };

        let err = service.create(&req).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[tokio::test]
    async fn create_issues_a_kenyan_iban_that_is_not_in_use() {
        let customer_id = Uuid::new_v4();

        let mut customer_client = MockCustomerExistenceClientTrait::new();
        customer_client
            .expect_exists_by_id()
            .returning(|_| Ok(true));

        let mut query = MockAccountQueryRepositoryTrait::new();
        query.expect_exists_by_iban().returning(|_| Ok(false));

        let mut command = MockAccountCommandRepositoryTrait::new();
        command
            .expect_create()
            .withf(move |req, iban| {
                req.customer_id == customer_id && iban.starts_with("KE") && iban.len() == 22
            })
            .times(1)
            .returning(move |req, iban| {
                let mut account = existing_account(Uuid::new_v4(), req.customer_id);
                account.iban = iban.to_string();
                account.bic_swift = req.bic_swift.clone();
                Ok(account)
            });

        let service = service(query, command, customer_client).await;

        let req = CreateAccountRequest {
            customer_id,
            bic_swift: "EQBLKENA".to_string(),
        };

        let response = service.create(&req).await.unwrap();
        assert!(response.data.iban.starts_with("KE"));
        assert_eq!(response.data.iban.len(), 22);
    }

    #[tokio::test]
    async fn create_retries_generation_when_an_iban_is_taken() {
        let mut customer_client = MockCustomerExistenceClientTrait::new();
        customer_client
            .expect_exists_by_id()
            .returning(|_| Ok(true));

        let mut seq = Sequence::new();
        let mut query = MockAccountQueryRepositoryTrait::new();
        query
            .expect_exists_by_iban()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(true));
        query
            .expect_exists_by_iban()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(false));

        let mut command = MockAccountCommandRepositoryTrait::new();
        command
            .expect_create()
            .times(1)
            .returning(|req, iban| {
                let mut account = existing_account(Uuid::new_v4(), req.customer_id);
                account.iban = iban.to_string();
                Ok(account)
            });

        let service = service(query, command, customer_client).await;

        let req = CreateAccountRequest {
            customer_id: Uuid::new_v4(),
            bic_swift: "KCBLKENX".to_string(),
        };

        service.create(&req).await.unwrap();
    }

    #[tokio::test]
    async fn create_gives_up_after_five_iban_collisions() {
        let mut customer_client = MockCustomerExistenceClientTrait::new();
        customer_client
            .expect_exists_by_id()
            .returning(|_| Ok(true));

        let mut query = MockAccountQueryRepositoryTrait::new();
        query
            .expect_exists_by_iban()
            .times(5)
            .returning(|_| Ok(true));

        let command = MockAccountCommandRepositoryTrait::new();

        let service = service(query, command, customer_client).await;

        let req = CreateAccountRequest {
            customer_id: Uuid::new_v4(),
            bic_swift: "KCBLKENX".to_string(),
        };

        let err = service.create(&req).await.unwrap_err();
        assert!(matches!(err, ServiceError::DuplicateResource(msg) if msg == "IBAN already exists"));
    }

    #[tokio::test]
    async fn update_does_not_probe_when_the_customer_is_unchanged() {
        let id = Uuid::new_v4();
        let customer_id = Uuid::new_v4();

        let mut query = MockAccountQueryRepositoryTrait::new();
        query
            .expect_find_by_id()
            .with(eq(id))
            .returning(move |_| Ok(existing_account(id, customer_id)));

        let mut command = MockAccountCommandRepositoryTrait::new();
        command
            .expect_update()
            .times(1)
            .returning(|account| Ok(account.clone()));

        let customer_client = MockCustomerExistenceClientTrait::new();

        let service = service(query, command, customer_client).await;

        let req = UpdateAccountRequest {
            customer_id: Some(customer_id),
            bic_swift: None,
        };

        service.update(id, &req).await.unwrap();
    }

    #[tokio::test]
    async fn update_probes_the_registry_when_moving_to_a_new_customer() {
        let id = Uuid::new_v4();
        let old_customer = Uuid::new_v4();
        let new_customer = Uuid::new_v4();

        let mut query = MockAccountQueryRepositoryTrait::new();
        query
            .expect_find_by_id()
            .returning(move |_| Ok(existing_account(id, old_customer)));

        let mut customer_client = MockCustomerExistenceClientTrait::new();
        customer_client
            .expect_exists_by_id()
            .with(eq(new_customer))
            .times(1)
            .returning(|_| Ok(true));

        let mut command = MockAccountCommandRepositoryTrait::new();
        command
            .expect_update()
            .withf(move |account| account.customer_id == new_customer)
            .times(1)
            .returning(|account| Ok(account.clone()));

        let service = service(query, command, customer_client).await;

        let req = UpdateAccountRequest {
            customer_id: Some(new_customer),
            bic_swift: None,
        };

        service.update(id, &req).await.unwrap();
    }

    #[tokio::test]
    async fn update_rejects_an_unknown_target_customer() {
        let id = Uuid::new_v4();
        let new_customer = Uuid::new_v4();

        let mut query = MockAccountQueryRepositoryTrait::new();
        query
            .expect_find_by_id()
            .returning(move |_| Ok(existing_account(id, Uuid::new_v4())));

        let mut customer_client = MockCustomerExistenceClientTrait::new();
        customer_client
            .expect_exists_by_id()
            .returning(|_| Ok(false));

        let command = MockAccountCommandRepositoryTrait::new();

        let service = service(query, command, customer_client).await;

        let req = UpdateAccountRequest {
            customer_id: Some(new_customer),
            bic_swift: None,
        };

        let err = service.update(id, &req).await.unwrap_err();
        assert!(matches!(err, ServiceError::CustomerNotFound));
    }

    #[tokio::test]
    async fn blank_bic_swift_is_ignored_on_update() {
        let id = Uuid::new_v4();

        let mut query = MockAccountQueryRepositoryTrait::new();
        query
            .expect_find_by_id()
            .returning(move |_| Ok(existing_account(id, Uuid::new_v4())));

        let mut command = MockAccountCommandRepositoryTrait::new();
        command
            .expect_update()
            .withf(|account| account.bic_swift == "KCBLKENX")
            .times(1)
            .returning(|account| Ok(account.clone()));

        let customer_client = MockCustomerExistenceClientTrait::new();

        let service = service(query, command, customer_client).await;

        let req = UpdateAccountRequest {
            customer_id: None,
            bic_swift: Some("   ".to_string()),
        };

        service.update(id, &req).await.unwrap();
    }

    #[tokio::test]
    async fn bic_swift_is_trimmed_before_it_is_stored() {
        let id = Uuid::new_v4();

        let mut query = MockAccountQueryRepositoryTrait::new();
        query
            .expect_find_by_id()
            .returning(move |_| Ok(existing_account(id, Uuid::new_v4())));

        let mut command = MockAccountCommandRepositoryTrait::new();
        command
            .expect_update()
            .withf(|account| account.bic_swift == "EQBLKENA")
            .times(1)
            .returning(|account| Ok(account.clone()));

        let customer_client = MockCustomerExistenceClientTrait::new();

        let service = service(query, command, customer_client).await;

        let req = UpdateAccountRequest {
            customer_id: None,
            bic_swift: Some("  EQBLKENA  ".to_string()),
        };

        service.update(id, &req).await.unwrap();
    }
}
