use crate::{
    abstract_trait::customer::repository::CustomerQueryRepositoryTrait, config::ConnectionPool,
    errors::RepositoryError, model::customer::CustomerModel,
};
use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::error;
use uuid::Uuid;

const SELECT_COLUMNS: &str = "id, first_name, last_name, other_name, email, phone_number, \
     national_id, date_of_birth, created_at, updated_at";

pub struct CustomerQueryRepository {
    db: ConnectionPool,
}

impl CustomerQueryRepository {
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
impl CustomerQueryRepositoryTrait for CustomerQueryRepository {
    async fn find_all(&self) -> Result<Vec<CustomerModel>, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let sql =
            format!("SELECT {SELECT_COLUMNS} FROM customers ORDER BY created_at DESC, id DESC");

        sqlx::query_as::<_, CustomerModel>(&sql)
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch customers: {e:?}");
                RepositoryError::Sqlx(e)
            })
    }

    async fn find_by_id(&self, id: Uuid) -> Result<CustomerModel, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let sql = format!("SELECT {SELECT_COLUMNS} FROM customers WHERE id = $1");

        let row = sqlx::query_as::<_, CustomerModel>(&sql)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch customer by ID {id}: {e:?}");
                RepositoryError::Sqlx(e)
            })?;

        row.ok_or(RepositoryError::NotFound)
    }

    async fn exists_by_id(&self, id: Uuid) -> Result<bool, RepositoryError> {
        let mut conn = self.get_conn().await?;

        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM customers WHERE id = $1)")
            .bind(id)
            .fetch_one(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to check customer existence for {id}: {e:?}");
                RepositoryError::Sqlx(e)
            })
    }

    async fn search_by_full_name(
        &self,
        name: &str,
    ) -> Result<Vec<CustomerModel>, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let sql = format!(
            "SELECT {SELECT_COLUMNS} FROM customers \
             WHERE CONCAT_WS(' ', first_name, other_name, last_name) ILIKE '%' || $1 || '%' \
             ORDER BY created_at DESC, id DESC"
        );

        sqlx::query_as::<_, CustomerModel>(&sql)
            .bind(name)
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to search customers by name: {e:?}");
                RepositoryError::Sqlx(e)
            })
    }

    async fn find_by_created_at_between(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<CustomerModel>, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let sql = format!(
            "SELECT {SELECT_COLUMNS} FROM customers \
             WHERE created_at::date BETWEEN $1 AND $2 \
             ORDER BY created_at DESC, id DESC"
        );

        sqlx::query_as::<_, CustomerModel>(&sql)
            .bind(from)
            .bind(to)
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch customers by created range: {e:?}");
                RepositoryError::Sqlx(e)
            })
    }
}
