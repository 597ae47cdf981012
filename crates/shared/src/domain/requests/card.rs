use crate::model::card::CardType;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate, IntoParams)]
pub struct FindCards {
    #[serde(default)]
    pub page: i32,

    #[serde(default = "default_size")]
    pub size: i32,

    /// Case-insensitive substring match on the alias.
    #[serde(default)]
    pub card_alias: Option<String>,

    #[serde(default)]
    pub card_type: Option<CardType>,

    /// Substring match against the stored plaintext PAN.
    #[serde(default)]
    pub pan: Option<String>,

    /// Return stored PANs and CVVs instead of the masked form.
    #[serde(default)]
    pub unmask: bool,
}

fn default_size() -> i32 {
    10
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct FindCardById {
    /// Return the stored PAN and CVV instead of the masked form.
    #[serde(default)]
    pub unmask: bool,
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct CardAliasQuery {
    pub card_alias: String,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateCardRequest {
    #[validate(length(min = 1, message = "Card alias is required"))]
    pub card_alias: String,

    pub account_id: Uuid,

    pub card_type: CardType,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateCardRequest {
    #[validate(length(min = 1, message = "Card alias is required"))]
    pub card_alias: String,
}
