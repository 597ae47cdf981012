use crate::{abstract_trait::client::CustomerExistenceClientTrait, errors::ClientError};
use async_trait::async_trait;
use tracing::error;
use uuid::Uuid;

/// Asks the customer registry whether a customer exists by probing its
/// get-by-id endpoint and inspecting only the status code.
pub struct CustomerExistenceClient {
    http: reqwest::Client,
    base_url: String,
}

impl CustomerExistenceClient {
    pub fn new(http: reqwest::Client, base_url: String) -> Self {
        Self { http, base_url }
    }
}

#[async_trait]
impl CustomerExistenceClientTrait for CustomerExistenceClient {
    async fn exists_by_id(&self, id: Uuid) -> Result<bool, ClientError> {
        let url = format!("{}/api/customers/{id}", self.base_url);

        let response = self.http.get(&url).send().await?;
        let status = response.status();

        if status.is_success() {
            Ok(true)
        } else if status == reqwest::StatusCode::NOT_FOUND {
            Ok(false)
        } else {
            error!("❌ Customer existence probe for {id} returned {status}");
            Err(ClientError::UnexpectedStatus {
                service: "customer-service".to_string(),
                status: status.as_u16(),
            })
        }
    }
}
