use crate::{
    abstract_trait::customer::repository::CustomerCommandRepositoryTrait, config::ConnectionPool,
    domain::requests::CreateCustomerRequest, errors::RepositoryError,
    model::customer::CustomerModel,
};
use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use tracing::error;
use uuid::Uuid;

pub struct CustomerCommandRepository {
    db: ConnectionPool,
}

impl CustomerCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }

    async fn get_conn(
        &self,
    ) -> Result<sqlx::pool::PoolConnection<sqlx::Postgres>, RepositoryError> {
        self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {e:?}");
            RepositoryError::from(e)
        })
    }
}

#[async_trait]
impl CustomerCommandRepositoryTrait for CustomerCommandRepository {
    async fn create(
        &self,
        request: &CreateCustomerRequest,
    ) -> Result<CustomerModel, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let row = sqlx::query_as::<_, CustomerModel>(
            r#"
            INSERT INTO customers
                (id, first_name, last_name, other_name, email, phone_number,
                 national_id, date_of_birth, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $9)
            RETURNING id, first_name, last_name, other_name, email, phone_number,
                      national_id, date_of_birth, created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&request.first_name)
        .bind(&request.last_name)
        .bind(&request.other_name)
        .bind(&request.email)
        .bind(&request.phone_number)
        .bind(&request.national_id)
        .bind(request.date_of_birth)
        .bind(Utc::now())
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to insert customer: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(row)
    }

    async fn update(&self, customer: &CustomerModel) -> Result<CustomerModel, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let row = sqlx::query_as::<_, CustomerModel>(
            r#"
            UPDATE customers
            SET first_name = $2,
                last_name = $3,
                other_name = $4,
                email = $5,
                phone_number = $6,
                national_id = $7,
                date_of_birth = $8,
                updated_at = $9
            WHERE id = $1
            RETURNING id, first_name, last_name, other_name, email, phone_number,
                      national_id, date_of_birth, created_at, updated_at
            "#,
        )
        .bind(customer.id)
        .bind(&customer.first_name)
        .bind(&customer.last_name)
        .bind(&customer.other_name)
        .bind(&customer.email)
        .bind(&customer.phone_number)
        .bind(&customer.national_id)
        .bind(customer.date_of_birth)
        .bind(customer.updated_at)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to update customer {}: {e:?}", customer.id);
            RepositoryError::from(e)
        })?;

        row.ok_or(RepositoryError::NotFound)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let mut conn = self.get_conn().await?;

        let result = sqlx::query("DELETE FROM customers WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to delete customer {id}: {e:?}");
                RepositoryError::Sqlx(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
