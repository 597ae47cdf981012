use crate::{
    abstract_trait::{
        account::{repository::DynAccountQueryRepository, service::AccountQueryServiceTrait},
        client::DynCardAliasClient,
    },
    domain::{
        requests::FindAccounts,
        responses::{AccountResponse, ApiResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::account::AccountModel,
    service::paginate,
};
use anyhow::Result;
use async_trait::async_trait;
use tracing::{error, info};
use uuid::Uuid;

pub struct AccountQueryService {
    query: DynAccountQueryRepository,
    card_client: DynCardAliasClient,
}

impl AccountQueryService {
    pub async fn new(query: DynAccountQueryRepository, card_client: DynCardAliasClient) -> Self {
        Self { query, card_client }
    }

    async fn find_by_card_alias(
        &self,
        card_alias: &str,
    ) -> Result<Vec<AccountModel>, ServiceError> {
        let account_ids = self
            .card_client
            .account_ids_by_alias(card_alias)
            .await
            .map_err(|e| {
                error!("❌ Card service lookup failed for alias {card_alias}: {e:?}");
                ServiceError::Client(e)
            })?;

        if account_ids.is_empty() {
            return Ok(Vec::new());
        }

        self.query
            .find_by_id_in(&account_ids)
            .await
            .map_err(ServiceError::Repo)
    }
}

#[async_trait]
impl AccountQueryServiceTrait for AccountQueryService {
    async fn find_all(
        &self,
        req: &FindAccounts,
    ) -> Result<ApiResponse<Vec<AccountResponse>>, ServiceError> {
        info!(
            "🔍 Fetching accounts | Page: {}, Size: {}, Iban: {:?}, Bic: {:?}, Alias: {:?}",
            req.page, req.size, req.iban, req.bic_swift, req.card_alias
        );

        let iban = req.iban.as_deref().filter(|s| !s.trim().is_empty());
        let bic_swift = req.bic_swift.as_deref().filter(|s| !s.trim().is_empty());
        let card_alias = req.card_alias.as_deref().filter(|s| !s.trim().is_empty());

        let accounts = if let Some(iban) = iban {
            self.query.find_by_iban(iban).await.map_err(ServiceError::Repo)?
        } else if let Some(bic_swift) = bic_swift {
            self.query
                .find_by_bic_swift(bic_swift)
                .await
                .map_err(ServiceError::Repo)?
        } else if let Some(card_alias) = card_alias {
            self.find_by_card_alias(card_alias).await?
        } else {
            self.query.find_all().await.map_err(ServiceError::Repo)?
        };

        let page = paginate(accounts, req.page, req.size);

        info!("✅ Found {} accounts", page.len());

        let responses: Vec<AccountResponse> =
            page.into_iter().map(AccountResponse::from).collect();

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Accounts retrieved successfully".to_string(),
            data: responses,
        })
    }

    async fn find_by_id(&self, id: Uuid) -> Result<ApiResponse<AccountResponse>, ServiceError> {
        info!("🔍 Fetching account {id}");

        let account = self.query.find_by_id(id).await.map_err(|e| match e {
            RepositoryError::NotFound => ServiceError::NotFound("Account not found".to_string()),
            other => {
                error!("❌ Failed to fetch account {id}: {other:?}");
                ServiceError::Repo(other)
            }
        })?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Account retrieved successfully".to_string(),
            data: account.into(),
        })
    }
}
