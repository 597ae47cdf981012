use crate::{
    abstract_trait::customer::{
        repository::{DynCustomerCommandRepository, DynCustomerQueryRepository},
        service::CustomerCommandServiceTrait,
    },
    domain::{
        requests::{CreateCustomerRequest, UpdateCustomerRequest},
        responses::{ApiResponse, CustomerResponse},
    },
    errors::{RepositoryError, ServiceError, format_validation_errors},
};
use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use tracing::{error, info};
use uuid::Uuid;
use validator::Validate;

pub struct CustomerCommandService {
    query: DynCustomerQueryRepository,
    command: DynCustomerCommandRepository,
}

impl CustomerCommandService {
    pub async fn new(
        query: DynCustomerQueryRepository,
        command: DynCustomerCommandRepository,
    ) -> Self {
        Self { query, command }
    }
}

#[async_trait]
impl CustomerCommandServiceTrait for CustomerCommandService {
    async fn create(
        &self,
        req: &CreateCustomerRequest,
    ) -> Result<ApiResponse<CustomerResponse>, ServiceError> {
        if let Err(validation_errors) = req.validate() {
            let error_msg = format_validation_errors(&validation_errors);
            error!("Validation failed: {error_msg}");
            return Err(ServiceError::Validation(error_msg));
        }

        info!("🆕 Creating customer | Email: {}", req.email);

        let customer = self.command.create(req).await.map_err(|e| match e {
            RepositoryError::AlreadyExists(_) => ServiceError::DuplicateResource(
                "Customer with this phone number and national ID already exists".to_string(),
            ),
            other => {
                error!("💥 Failed to create customer: {other:?}");
                ServiceError::Repo(other)
            }
        })?;

        let response = CustomerResponse::from(customer);

        info!("✅ Customer created successfully with id={}", response.id);

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Customer created successfully".to_string(),
            data: response,
        })
    }

    async fn update(
        &self,
        id: Uuid,
        req: &UpdateCustomerRequest,
    ) -> Result<ApiResponse<CustomerResponse>, ServiceError> {
        if let Err(validation_errors) = req.validate() {
            let error_msg = format_validation_errors(&validation_errors);
            error!("Validation failed: {error_msg}");
            return Err(ServiceError::Validation(error_msg));
        }

        info!("🔄 Updating customer id={id}");

        let mut customer = self.query.find_by_id(id).await.map_err(|e| match e {
            RepositoryError::NotFound => ServiceError::NotFound("Customer not found".to_string()),
            other => ServiceError::Repo(other),
        })?;

        if let Some(first_name) = &req.first_name {
            customer.first_name = first_name.clone();
        }
        if let Some(last_name) = &req.last_name {
            customer.last_name = last_name.clone();
        }
        if let Some(other_name) = &req.other_name {
            customer.other_name = Some(other_name.clone());
        }
        if let Some(email) = &req.email {
            customer.email = email.clone();
        }
        if let Some(phone_number) = &req.phone_number {
            customer.phone_number = phone_number.clone();
        }
        if let Some(national_id) = &req.national_id {
            customer.national_id = national_id.clone();
        }
        if let Some(date_of_birth) = req.date_of_birth {
            customer.date_of_birth = date_of_birth;
        }
        customer.updated_at = Utc::now();

        let updated = self.command.update(&customer).await.map_err(|e| match e {
            RepositoryError::NotFound => ServiceError::NotFound("Customer not found".to_string()),
            RepositoryError::AlreadyExists(_) => ServiceError::DuplicateResource(
                "Customer with this phone number and national ID already exists".to_string(),
            ),
            other => {
                error!("💥 Failed to update customer id={id}: {other:?}");
                ServiceError::Repo(other)
            }
        })?;

        info!("✅ Customer updated successfully with id={id}");

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Customer updated successfully".to_string(),
            data: updated.into(),
        })
    }

    async fn delete(&self, id: Uuid) -> Result<ApiResponse<()>, ServiceError> {
        info!("🗑️ Deleting customer id={id}");

        let exists = self.query.exists_by_id(id).await.map_err(ServiceError::Repo)?;
        if !exists {
            return Err(ServiceError::NotFound("Customer not found".to_string()));
        }

        self.command.delete(id).await.map_err(|e| match e {
            RepositoryError::NotFound => ServiceError::NotFound("Customer not found".to_string()),
            other => {
                error!("💥 Failed to delete customer id={id}: {other:?}");
                ServiceError::Repo(other)
            }
        })?;

        info!("✅ Customer deleted successfully with id={id}");

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Customer deleted successfully".to_string(),
            data: (),
        })
    }
}
