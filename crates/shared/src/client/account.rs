use crate::{abstract_trait::client::AccountExistenceClientTrait, errors::ClientError};
use async_trait::async_trait;
use tracing::error;
use uuid::Uuid;

/// Asks the account issuer whether an account exists by probing its
/// get-by-id endpoint. Any 4xx answer counts as missing; only transport
/// failures and 5xx surface as errors.
pub struct AccountExistenceClient {
    http: reqwest::Client,
    base_url: String,
}

impl AccountExistenceClient {
    pub fn new(http: reqwest::Client, base_url: String) -> Self {
        Self { http, base_url }
    }
}

#[async_trait]
impl AccountExistenceClientTrait for AccountExistenceClient {
    async fn exists_by_id(&self, id: Uuid) -> Result<bool, ClientError> {
        let url = format!("{}/api/accounts/{id}", self.base_url);

        let response = self.http.get(&url).send().await?;
        let status = response.status();

        if status.is_success() {
            Ok(true)
        } else if status.is_client_error() {
            Ok(false)
        } else {
            error!("❌ Account existence probe for {id} returned {status}");
            Err(ClientError::UnexpectedStatus {
                service: "account-service".to_string(),
                status: status.as_u16(),
            })
        }
    }
}
