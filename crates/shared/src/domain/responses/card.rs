use crate::{
    model::card::{CardModel, CardType},
    utils::{mask_cvv, mask_pan},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CardResponse {
    pub id: Uuid,
    pub card_alias: String,
    pub account_id: Uuid,
    pub card_type: CardType,
    pub pan: String,
    pub cvv: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CardResponse {
    /// Masks the PAN and CVV. This is the default shape for every endpoint.
    pub fn masked(model: &CardModel) -> Self {
        Self {
            id: model.id,
            card_alias: model.card_alias.clone(),
            account_id: model.account_id,
            card_type: model.card_type,
            pan: mask_pan(&model.pan),
            cvv: mask_cvv(),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }

    /// Returns the stored PAN and CVV verbatim. Only the explicit unmask
    /// read path may call this.
    pub fn unmasked(model: &CardModel) -> Self {
        Self {
            id: model.id,
            card_alias: model.card_alias.clone(),
            account_id: model.account_id,
            card_type: model.card_type,
            pan: model.pan.clone(),
            cvv: model.cvv.clone(),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
