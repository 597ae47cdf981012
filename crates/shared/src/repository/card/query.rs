use crate::{
    abstract_trait::card::repository::CardQueryRepositoryTrait,
    config::ConnectionPool,
    errors::RepositoryError,
    model::card::{CardModel, CardType},
};
use anyhow::Result;
use async_trait::async_trait;
use tracing::error;
use uuid::Uuid;

const SELECT_COLUMNS: &str =
    "id, card_alias, account_id, card_type, pan, cvv, created_at, updated_at";

pub struct CardQueryRepository {
    db: ConnectionPool,
}

impl CardQueryRepository {
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
impl CardQueryRepositoryTrait for CardQueryRepository {
    async fn find_all(&self) -> Result<Vec<CardModel>, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let sql = format!("SELECT {SELECT_COLUMNS} FROM cards ORDER BY created_at DESC, id DESC");

        sqlx::query_as::<_, CardModel>(&sql)
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch cards: {e:?}");
                RepositoryError::Sqlx(e)
            })
    }

    async fn find_by_id(&self, id: Uuid) -> Result<CardModel, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let sql = format!("SELECT {SELECT_COLUMNS} FROM cards WHERE id = $1");

        let row = sqlx::query_as::<_, CardModel>(&sql)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch card by ID {id}: {e:?}");
                RepositoryError::Sqlx(e)
            })?;

        row.ok_or(RepositoryError::NotFound)
    }

    async fn exists_by_id(&self, id: Uuid) -> Result<bool, RepositoryError> {
        let mut conn = self.get_conn().await?;

        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM cards WHERE id = $1)")
            .bind(id)
            .fetch_one(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to check card existence for {id}: {e:?}");
                RepositoryError::Sqlx(e)
            })
    }

    async fn find_by_alias(&self, card_alias: &str) -> Result<Vec<CardModel>, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let sql = format!(
            "SELECT {SELECT_COLUMNS} FROM cards WHERE card_alias ILIKE '%' || $1 || '%' \
             ORDER BY created_at DESC, id DESC"
        );

        sqlx::query_as::<_, CardModel>(&sql)
            .bind(card_alias)
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch cards by alias: {e:?}");
                RepositoryError::Sqlx(e)
            })
    }

    async fn find_by_card_type(
        &self,
        card_type: CardType,
    ) -> Result<Vec<CardModel>, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let sql = format!(
            "SELECT {SELECT_COLUMNS} FROM cards WHERE card_type = $1 \
             ORDER BY created_at DESC, id DESC"
        );

        sqlx::query_as::<_, CardModel>(&sql)
            .bind(card_type)
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch cards by type {card_type}: {e:?}");
                RepositoryError::Sqlx(e)
            })
    }

    async fn find_by_pan(&self, pan: &str) -> Result<Vec<CardModel>, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let sql = format!(
            "SELECT {SELECT_COLUMNS} FROM cards WHERE pan LIKE '%' || $1 || '%' \
             ORDER BY created_at DESC, id DESC"
        );

        sqlx::query_as::<_, CardModel>(&sql)
            .bind(pan)
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch cards by PAN: {e:?}");
                RepositoryError::Sqlx(e)
            })
    }

    async fn count_by_account_id(&self, account_id: Uuid) -> Result<i64, RepositoryError> {
        let mut conn = self.get_conn().await?;

        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM cards WHERE account_id = $1")
            .bind(account_id)
            .fetch_one(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to count cards for account {account_id}: {e:?}");
                RepositoryError::Sqlx(e)
            })
    }

    async fn exists_by_account_id_and_card_type(
        &self,
        account_id: Uuid,
        card_type: CardType,
    ) -> Result<bool, RepositoryError> {
        let mut conn = self.get_conn().await?;

        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM cards WHERE account_id = $1 AND card_type = $2)",
        )
        .bind(account_id)
        .bind(card_type)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to check card type on account {account_id}: {e:?}");
            RepositoryError::Sqlx(e)
        })
    }

    async fn exists_alias_on_account_excluding(
        &self,
        account_id: Uuid,
        card_alias: &str,
        exclude_id: Uuid,
    ) -> Result<bool, RepositoryError> {
        let mut conn = self.get_conn().await?;

        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM cards \
             WHERE account_id = $1 AND LOWER(card_alias) = LOWER($2) AND id <> $3)",
        )
        .bind(account_id)
        .bind(card_alias)
        .bind(exclude_id)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to check alias on account {account_id}: {e:?}");
            RepositoryError::Sqlx(e)
        })
    }

    async fn find_account_ids_by_alias(
        &self,
        card_alias: &str,
    ) -> Result<Vec<Uuid>, RepositoryError> {
        let mut conn = self.get_conn().await?;

        sqlx::query_scalar::<_, Uuid>(
            "SELECT account_id FROM cards WHERE card_alias ILIKE '%' || $1 || '%'",
        )
        .bind(card_alias)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to resolve account ids by alias: {e:?}");
            RepositoryError::Sqlx(e)
        })
    }
}
