use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate, IntoParams)]
pub struct FindCustomers {
    #[serde(default)]
    pub page: i32,

    #[serde(default = "default_size")]
    pub size: i32,

    /// Case-insensitive substring match over the concatenated full name.
    #[serde(default)]
    pub name: Option<String>,

    /// Start of the created-at range, inclusive.
    #[serde(default)]
    pub from: Option<NaiveDate>,

    /// End of the created-at range, inclusive.
    #[serde(default)]
    pub to: Option<NaiveDate>,
}

fn default_size() -> i32 {
    10
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateCustomerRequest {
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,

    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,

    pub other_name: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 7, max = 15, message = "Phone number must be 7 to 15 characters"))]
    pub phone_number: String,

    #[validate(length(min = 1, message = "National ID is required"))]
    pub national_id: String,

    pub date_of_birth: NaiveDate,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateCustomerRequest {
    #[validate(length(min = 1, message = "First name must not be empty"))]
    pub first_name: Option<String>,

    #[validate(length(min = 1, message = "Last name must not be empty"))]
    pub last_name: Option<String>,

    pub other_name: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    #[validate(length(min = 7, max = 15, message = "Phone number must be 7 to 15 characters"))]
    pub phone_number: Option<String>,

    #[validate(length(min = 1, message = "National ID must not be empty"))]
    pub national_id: Option<String>,

    pub date_of_birth: Option<NaiveDate>,
}
