use crate::{
    abstract_trait::customer::{
        repository::DynCustomerQueryRepository, service::CustomerQueryServiceTrait,
    },
    domain::{
        requests::FindCustomers,
        responses::{ApiResponse, CustomerResponse},
    },
    errors::{RepositoryError, ServiceError},
    service::paginate,
};
use anyhow::Result;
use async_trait::async_trait;
use tracing::{error, info};
use uuid::Uuid;

pub struct CustomerQueryService {
    query: DynCustomerQueryRepository,
}

impl CustomerQueryService {
    pub async fn new(query: DynCustomerQueryRepository) -> Self {
        Self { query }
    }
}

#[async_trait]
impl CustomerQueryServiceTrait for CustomerQueryService {
    async fn find_all(
        &self,
        req: &FindCustomers,
    ) -> Result<ApiResponse<Vec<CustomerResponse>>, ServiceError> {
        info!(
            "🔍 Fetching customers | Page: {}, Size: {}, Name: {:?}",
            req.page,
            req.size,
            req.name.as_deref().unwrap_or("None")
        );

        let name_filter = req.name.as_deref().filter(|n| !n.trim().is_empty());

        let customers = if let Some(name) = name_filter {
            self.query.search_by_full_name(name).await
        } else if let (Some(from), Some(to)) = (req.from, req.to) {
            self.query.find_by_created_at_between(from, to).await
        } else {
            self.query.find_all().await
        }
        .map_err(|e| {
            error!("❌ Failed to fetch customers: {e:?}");
            ServiceError::Repo(e)
        })?;

        let page = paginate(customers, req.page, req.size);

        info!("✅ Found {} customers", page.len());

        let responses: Vec<CustomerResponse> =
            page.into_iter().map(CustomerResponse::from).collect();

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Customers retrieved successfully".to_string(),
            data: responses,
        })
    }

    async fn find_by_id(&self, id: Uuid) -> Result<ApiResponse<CustomerResponse>, ServiceError> {
        info!("🔍 Fetching customer {id}");

        let customer = self.query.find_by_id(id).await.map_err(|e| match e {
            RepositoryError::NotFound => ServiceError::NotFound("Customer not found".to_string()),
            other => {
                error!("❌ Failed to fetch customer {id}: {other:?}");
                ServiceError::Repo(other)
            }
        })?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Customer retrieved successfully".to_string(),
            data: customer.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::customer::repository::MockCustomerQueryRepositoryTrait,
        model::customer::CustomerModel,
    };
    use chrono::{NaiveDate, Utc};
    use mockall::predicate::eq;
    use std::sync::Arc;

    fn customer(first_name: &str) -> CustomerModel {
        CustomerModel {
            id: Uuid::new_v4(),
            first_name: first_name.to_string(),
            last_name: "Mwangi".to_string(),
            other_name: None,
            email: format!("{}@example.com", first_name.to_lowercase()),
            phone_number: "0712345678".to_string(),
            national_id: "12345678".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 4, 12).unwrap(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn find_req() -> FindCustomers {
        FindCustomers {
            page: 0,
            size: 10,
            name: None,
            from: None,
            to: None,
        }
    }

    #[tokio::test]
    async fn name_filter_takes_precedence_over_date_range() {
        let mut query = MockCustomerQueryRepositoryTrait::new();
        query
            .expect_search_by_full_name()
            .with(eq("Jane"))
            .times(1)
            .returning(|_| Ok(vec![]));

        let service = CustomerQueryService::new(Arc::new(query)).await;

        let mut req = find_req();
        req.name = Some("Jane".to_string());
        req.from = NaiveDate::from_ymd_opt(2024, 1, 1);
        req.to = NaiveDate::from_ymd_opt(2024, 12, 31);

        let response = service.find_all(&req).await.unwrap();
        assert_eq!(response.status, "success");
        assert!(response.data.is_empty());
    }

    #[tokio::test]
    async fn date_range_is_used_when_name_is_absent() {
        let from = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let to = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();

        let mut query = MockCustomerQueryRepositoryTrait::new();
        query
            .expect_find_by_created_at_between()
            .with(eq(from), eq(to))
            .times(1)
            .returning(|_, _| Ok(vec![]));

        let service = CustomerQueryService::new(Arc::new(query)).await;

        let mut req = find_req();
        req.from = Some(from);
        req.to = Some(to);

        service.find_all(&req).await.unwrap();
    }

    #[tokio::test]
    async fn blank_name_falls_through_to_unfiltered_listing() {
        let mut query = MockCustomerQueryRepositoryTrait::new();
        query.expect_find_all().times(1).returning(|| Ok(vec![]));

        let service = CustomerQueryService::new(Arc::new(query)).await;

        let mut req = find_req();
        req.name = Some("   ".to_string());

        service.find_all(&req).await.unwrap();
    }

    #[tokio::test]
    async fn listing_is_paginated_client_side() {
        let mut query = MockCustomerQueryRepositoryTrait::new();
        query.expect_find_all().returning(|| {
            Ok(vec![
                customer("A"),
                customer("B"),
                customer("C"),
                customer("D"),
                customer("E"),
            ])
        });

        let service = CustomerQueryService::new(Arc::new(query)).await;

        let mut req = find_req();
        req.page = 1;
        req.size = 2;

        let response = service.find_all(&req).await.unwrap();
        let names: Vec<&str> = response.data.iter().map(|c| c.first_name.as_str()).collect();
        assert_eq!(names, vec!["C", "D"]);
    }

    #[tokio::test]
    async fn missing_customer_maps_to_not_found() {
        let id = Uuid::new_v4();

        let mut query = MockCustomerQueryRepositoryTrait::new();
        query
            .expect_find_by_id()
            .with(eq(id))
            .returning(|_| Err(RepositoryError::NotFound));

        let service = CustomerQueryService::new(Arc::new(query)).await;

        let err = service.find_by_id(id).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(msg) if msg == "Customer not found"));
    }
}
