use crate::{
    abstract_trait::account::repository::AccountQueryRepositoryTrait, config::ConnectionPool,
    errors::RepositoryError, model::account::AccountModel,
};
use anyhow::Result;
use async_trait::async_trait;
use tracing::error;
use uuid::Uuid;

const SELECT_COLUMNS: &str = "id, iban, bic_swift, customer_id, created_at, updated_at";

pub struct AccountQueryRepository {
    db: ConnectionPool,
}

impl AccountQueryRepository {
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
impl AccountQueryRepositoryTrait for AccountQueryRepository {
    async fn find_all(&self) -> Result<Vec<AccountModel>, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let sql =
            format!("SELECT {SELECT_COLUMNS} FROM accounts ORDER BY created_at DESC, id DESC");

        sqlx::query_as::<_, AccountModel>(&sql)
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch accounts: {e:?}");
                RepositoryError::Sqlx(e)
            })
    }

    async fn find_by_id(&self, id: Uuid) -> Result<AccountModel, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let sql = format!("SELECT {SELECT_COLUMNS} FROM accounts WHERE id = $1");

        let row = sqlx::query_as::<_, AccountModel>(&sql)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch account by ID {id}: {e:?}");
                RepositoryError::Sqlx(e)
            })?;

        row.ok_or(RepositoryError::NotFound)
    }

    async fn exists_by_id(&self, id: Uuid) -> Result<bool, RepositoryError> {
        let mut conn = self.get_conn().await?;

        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM accounts WHERE id = $1)")
            .bind(id)
            .fetch_one(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to check account existence for {id}: {e:?}");
                RepositoryError::Sqlx(e)
            })
    }

    async fn exists_by_iban(&self, iban: &str) -> Result<bool, RepositoryError> {
        let mut conn = self.get_conn().await?;

        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM accounts WHERE iban = $1)")
            .bind(iban)
            .fetch_one(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to check IBAN existence: {e:?}");
                RepositoryError::Sqlx(e)
            })
    }

    async fn find_by_iban(&self, iban: &str) -> Result<Vec<AccountModel>, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let sql = format!(
            "SELECT {SELECT_COLUMNS} FROM accounts WHERE iban ILIKE '%' || $1 || '%' \
             ORDER BY created_at DESC, id DESC"
        );

        sqlx::query_as::<_, AccountModel>(&sql)
            .bind(iban)
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch accounts by IBAN: {e:?}");
                RepositoryError::Sqlx(e)
            })
    }

    async fn find_by_bic_swift(
        &self,
        bic_swift: &str,
    ) -> Result<Vec<AccountModel>, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let sql = format!(
            "SELECT {SELECT_COLUMNS} FROM accounts WHERE bic_swift ILIKE '%' || $1 || '%' \
             ORDER BY created_at DESC, id DESC"
        );

        sqlx::query_as::<_, AccountModel>(&sql)
            .bind(bic_swift)
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch accounts by BIC/SWIFT: {e:?}");
                RepositoryError::Sqlx(e)
            })
    }

    async fn find_by_id_in(&self, ids: &[Uuid]) -> Result<Vec<AccountModel>, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let sql = format!(
            "SELECT {SELECT_COLUMNS} FROM accounts WHERE id = ANY($1) \
             ORDER BY created_at DESC, id DESC"
        );

        sqlx::query_as::<_, AccountModel>(&sql)
            .bind(ids)
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch accounts by id list: {e:?}");
                RepositoryError::Sqlx(e)
            })
    }
}
