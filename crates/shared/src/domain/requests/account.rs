use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate, IntoParams)]
pub struct FindAccounts {
    #[serde(default)]
    pub page: i32,

    #[serde(default = "default_size")]
    pub size: i32,

    /// Case-insensitive substring match on the IBAN.
    #[serde(default)]
    pub iban: Option<String>,

    /// Case-insensitive substring match on the BIC/SWIFT.
    #[serde(default)]
    pub bic_swift: Option<String>,

    /// Resolves accounts through the card vault by card alias.
    #[serde(default)]
    pub card_alias: Option<String>,
}

fn default_size() -> i32 {
    10
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateAccountRequest {
    pub customer_id: Uuid,

    #[validate(length(min = 1, message = "BIC/SWIFT is required"))]
    pub bic_swift: String,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateAccountRequest {
    pub customer_id: Option<Uuid>,

    pub bic_swift: Option<String>,
}
