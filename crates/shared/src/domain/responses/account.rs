use crate::model::account::AccountModel;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AccountResponse {
    pub id: Uuid,
    pub iban: String,
    pub bic_swift: String,
    pub customer_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<AccountModel> for AccountResponse {
    fn from(model: AccountModel) -> Self {
        Self {
            id: model.id,
            iban: model.iban,
            bic_swift: model.bic_swift,
            customer_id: model.customer_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
