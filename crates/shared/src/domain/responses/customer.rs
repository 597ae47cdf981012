use crate::model::customer::CustomerModel;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CustomerResponse {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub other_name: Option<String>,
    pub email: String,
    pub phone_number: String,
    pub national_id: String,
    pub date_of_birth: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<CustomerModel> for CustomerResponse {
    fn from(model: CustomerModel) -> Self {
        Self {
            id: model.id,
            first_name: model.first_name,
            last_name: model.last_name,
            other_name: model.other_name,
            email: model.email,
            phone_number: model.phone_number,
            national_id: model.national_id,
            date_of_birth: model.date_of_birth,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
