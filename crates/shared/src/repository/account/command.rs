use crate::{
    abstract_trait::account::repository::AccountCommandRepositoryTrait, config::ConnectionPool,
    domain::requests::CreateAccountRequest, errors::RepositoryError, model::account::AccountModel,
};
use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use tracing::error;
use uuid::Uuid;

pub struct AccountCommandRepository {
    db: ConnectionPool,
}

impl AccountCommandRepository {
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
impl AccountCommandRepositoryTrait for AccountCommandRepository {
    async fn create(
        &self,
        request: &CreateAccountRequest,
        iban: &str,
    ) -> Result<AccountModel, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let row = sqlx::query_as::<_, AccountModel>(
            r#"
            INSERT INTO accounts (id, iban, bic_swift, customer_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $5)
            RETURNING id, iban, bic_swift, customer_id, created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(iban)
        .bind(&request.bic_swift)
        .bind(request.customer_id)
        .bind(Utc::now())
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to insert account: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(row)
    }

    async fn update(&self, account: &AccountModel) -> Result<AccountModel, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let row = sqlx::query_as::<_, AccountModel>(
            r#"
            UPDATE accounts
            SET bic_swift = $2,
                customer_id = $3,
                updated_at = $4
            WHERE id = $1
            RETURNING id, iban, bic_swift, customer_id, created_at, updated_at
            "#,
        )
        .bind(account.id)
        .bind(&account.bic_swift)
        .bind(account.customer_id)
        .bind(account.updated_at)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to update account {}: {e:?}", account.id);
            RepositoryError::from(e)
        })?;

        row.ok_or(RepositoryError::NotFound)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let mut conn = self.get_conn().await?;

        let result = sqlx::query("DELETE FROM accounts WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to delete account {id}: {e:?}");
                RepositoryError::Sqlx(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
