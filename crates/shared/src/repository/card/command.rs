use crate::{
    abstract_trait::card::repository::CardCommandRepositoryTrait, config::ConnectionPool,
    domain::requests::CreateCardRequest, errors::RepositoryError, model::card::CardModel,
};
use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use tracing::error;
use uuid::Uuid;

pub struct CardCommandRepository {
    db: ConnectionPool,
}

impl CardCommandRepository {
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
impl CardCommandRepositoryTrait for CardCommandRepository {
    async fn create(
        &self,
        request: &CreateCardRequest,
        pan: &str,
        cvv: &str,
    ) -> Result<CardModel, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let row = sqlx::query_as::<_, CardModel>(
            r#"
            INSERT INTO cards (id, card_alias, account_id, card_type, pan, cvv, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $7)
            RETURNING id, card_alias, account_id, card_type, pan, cvv, created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&request.card_alias)
        .bind(request.account_id)
        .bind(request.card_type)
        .bind(pan)
        .bind(cvv)
        .bind(Utc::now())
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to insert card: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(row)
    }

    async fn update_alias(
        &self,
        id: Uuid,
        card_alias: &str,
    ) -> Result<CardModel, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let row = sqlx::query_as::<_, CardModel>(
            r#"
            UPDATE cards
            SET card_alias = $2,
                updated_at = $3
            WHERE id = $1
            RETURNING id, card_alias, account_id, card_type, pan, cvv, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(card_alias)
        .bind(Utc::now())
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to update card alias for {id}: {e:?}");
            RepositoryError::from(e)
        })?;

        row.ok_or(RepositoryError::NotFound)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let mut conn = self.get_conn().await?;

        let result = sqlx::query("DELETE FROM cards WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to delete card {id}: {e:?}");
                RepositoryError::Sqlx(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
