use anyhow::Result;
use shared::{
    abstract_trait::{
        card::{
            repository::{DynCardCommandRepository, DynCardQueryRepository},
            service::{DynCardCommandService, DynCardQueryService},
        },
        client::DynAccountExistenceClient,
    },
    client::{AccountExistenceClient, build_http_client},
    config::ConnectionPool,
    repository::card::{command::CardCommandRepository, query::CardQueryRepository},
    service::card::{command::CardCommandService, query::CardQueryService},
};
use std::sync::Arc;

#[derive(Clone)]
pub struct CardQueryDeps {
    pub repo: DynCardQueryRepository,
    pub service: DynCardQueryService,
}

impl CardQueryDeps {
    pub async fn new(db: ConnectionPool) -> Result<Self> {
        let repo = Arc::new(CardQueryRepository::new(db.clone())) as DynCardQueryRepository;
        let service = Arc::new(CardQueryService::new(repo.clone()).await) as DynCardQueryService;

        Ok(Self { repo, service })
    }
}

#[derive(Clone)]
pub struct CardCommandDeps {
    pub repo: DynCardCommandRepository,
    pub service: DynCardCommandService,
}

impl CardCommandDeps {
    pub async fn new(
        db: ConnectionPool,
        query_repo: DynCardQueryRepository,
        account_client: DynAccountExistenceClient,
    ) -> Result<Self> {
        let repo = Arc::new(CardCommandRepository::new(db.clone())) as DynCardCommandRepository;
        let service =
            Arc::new(CardCommandService::new(query_repo, repo.clone(), account_client).await)
                as DynCardCommandService;

        Ok(Self { repo, service })
    }
}

#[derive(Clone)]
pub struct DependenciesInject {
    pub card_query: CardQueryDeps,
    pub card_command: CardCommandDeps,
}

impl DependenciesInject {
    pub async fn new(db: ConnectionPool, account_service_url: String) -> Result<Self> {
        let http = build_http_client()?;

        let account_client = Arc::new(AccountExistenceClient::new(http, account_service_url))
            as DynAccountExistenceClient;

        let card_query = CardQueryDeps::new(db.clone()).await?;
        let card_command =
            CardCommandDeps::new(db.clone(), card_query.repo.clone(), account_client).await?;

        Ok(Self {
            card_query,
            card_command,
        })
    }
}
