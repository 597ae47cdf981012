use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "card_type", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum CardType {
    Virtual,
    Physical,
}

impl fmt::Display for CardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardType::Virtual => write!(f, "VIRTUAL"),
            CardType::Physical => write!(f, "PHYSICAL"),
        }
    }
}

impl FromStr for CardType {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_uppercase().as_str() {
            "VIRTUAL" => Ok(CardType::Virtual),
            "PHYSICAL" => Ok(CardType::Physical),
            other => Err(format!("Invalid card type: {other}")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CardModel {
    pub id: Uuid,
    pub card_alias: String,
    pub account_id: Uuid,
    pub card_type: CardType,
    pub pan: String,
    pub cvv: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
