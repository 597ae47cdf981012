use anyhow::Result;
use shared::{
    abstract_trait::{
        account::{
            repository::{DynAccountCommandRepository, DynAccountQueryRepository},
            service::{DynAccountCommandService, DynAccountQueryService},
        },
        client::{DynCardAliasClient, DynCustomerExistenceClient},
    },
    client::{CardAliasClient, CustomerExistenceClient, build_http_client},
    config::ConnectionPool,
    repository::account::{command::AccountCommandRepository, query::AccountQueryRepository},
    service::account::{command::AccountCommandService, query::AccountQueryService},
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AccountQueryDeps {
    pub repo: DynAccountQueryRepository,
    pub service: DynAccountQueryService,
}

impl AccountQueryDeps {
    pub async fn new(db: ConnectionPool, card_client: DynCardAliasClient) -> Result<Self> {
        let repo = Arc::new(AccountQueryRepository::new(db.clone())) as DynAccountQueryRepository;
        let service = Arc::new(AccountQueryService::new(repo.clone(), card_client).await)
            as DynAccountQueryService;

        Ok(Self { repo, service })
    }
}

#[derive(Clone)]
pub struct AccountCommandDeps {
    pub repo: DynAccountCommandRepository,
    pub service: DynAccountCommandService,
}

impl AccountCommandDeps {
    pub async fn new(
        db: ConnectionPool,
        query_repo: DynAccountQueryRepository,
        customer_client: DynCustomerExistenceClient,
    ) -> Result<Self> {
        let repo =
            Arc::new(AccountCommandRepository::new(db.clone())) as DynAccountCommandRepository;
        let service = Arc::new(
            AccountCommandService::new(query_repo, repo.clone(), customer_client).await,
        ) as DynAccountCommandService;

        Ok(Self { repo, service })
    }
}

#[derive(Clone)]
pub struct DependenciesInject {
    pub account_query: AccountQueryDeps,
    pub account_command: AccountCommandDeps,
}

impl DependenciesInject {
    pub async fn new(
        db: ConnectionPool,
        customer_service_url: String,
        card_service_url: String,
    ) -> Result<Self> {
        let http = build_http_client()?;

        let customer_client =
            Arc::new(CustomerExistenceClient::new(http.clone(), customer_service_url))
                as DynCustomerExistenceClient;
        let card_client =
            Arc::new(CardAliasClient::new(http, card_service_url)) as DynCardAliasClient;

        let account_query = AccountQueryDeps::new(db.clone(), card_client).await?;
        let account_command =
            AccountCommandDeps::new(db.clone(), account_query.repo.clone(), customer_client)
                .await?;

        Ok(Self {
            account_query,
            account_command,
        })
    }
}
