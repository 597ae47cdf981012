use anyhow::Result;
use shared::{
    abstract_trait::customer::{
        repository::{DynCustomerCommandRepository, DynCustomerQueryRepository},
        service::{DynCustomerCommandService, DynCustomerQueryService},
    },
    config::ConnectionPool,
    repository::customer::{command::CustomerCommandRepository, query::CustomerQueryRepository},
    service::customer::{command::CustomerCommandService, query::CustomerQueryService},
};
use std::sync::Arc;

#[derive(Clone)]
pub struct CustomerQueryDeps {
    pub repo: DynCustomerQueryRepository,
    pub service: DynCustomerQueryService,
}

impl CustomerQueryDeps {
    pub async fn new(db: ConnectionPool) -> Result<Self> {
        let repo = Arc::new(CustomerQueryRepository::new(db.clone())) as DynCustomerQueryRepository;
        let service =
            Arc::new(CustomerQueryService::new(repo.clone()).await) as DynCustomerQueryService;

        Ok(Self { repo, service })
    }
}

#[derive(Clone)]
pub struct CustomerCommandDeps {
    pub repo: DynCustomerCommandRepository,
    pub service: DynCustomerCommandService,
}

impl CustomerCommandDeps {
    pub async fn new(
        db: ConnectionPool,
        query_repo: DynCustomerQueryRepository,
    ) -> Result<Self> {
        let repo =
            Arc::new(CustomerCommandRepository::new(db.clone())) as DynCustomerCommandRepository;
        let service = Arc::new(CustomerCommandService::new(query_repo, repo.clone()).await)
            as DynCustomerCommandService;

        Ok(Self { repo, service })
    }
}

#[derive(Clone)]
pub struct DependenciesInject {
    pub customer_query: CustomerQueryDeps,
    pub customer_command: CustomerCommandDeps,
}

impl DependenciesInject {
    pub async fn new(db: ConnectionPool) -> Result<Self> {
        let customer_query = CustomerQueryDeps::new(db.clone()).await?;
        let customer_command =
            CustomerCommandDeps::new(db.clone(), customer_query.repo.clone()).await?;

        Ok(Self {
            customer_query,
            customer_command,
        })
    }
}
