use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CustomerModel {
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
