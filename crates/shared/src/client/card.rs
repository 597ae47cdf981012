use crate::{abstract_trait::client::CardAliasClientTrait, errors::ClientError};
use async_trait::async_trait;
use tracing::error;
use uuid::Uuid;

/// Resolves a card alias to the account ids holding it, via the card
/// vault's internal lookup endpoint.
pub struct CardAliasClient {
    http: reqwest::Client,
    base_url: String,
}

impl CardAliasClient {
    pub fn new(http: reqwest::Client, base_url: String) -> Self {
        Self { http, base_url }
    }
}

#[async_trait]
impl CardAliasClientTrait for CardAliasClient {
    async fn account_ids_by_alias(&self, card_alias: &str) -> Result<Vec<Uuid>, ClientError> {
        let url = format!("{}/api/cards/internal/account-ids", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[("card_alias", card_alias)])
            .send()
            .await?;
        let status = response.status();

        if !status.is_success() {
            error!("❌ Card alias lookup returned {status}");
            return Err(ClientError::UnexpectedStatus {
                service: "card-service".to_string(),
                status: status.as_u16(),
            });
        }

        response
            .json::<Vec<Uuid>>()
            .await
            .map_err(|e| ClientError::InvalidBody {
                service: "card-service".to_string(),
                message: e.to_string(),
            })
    }
}
