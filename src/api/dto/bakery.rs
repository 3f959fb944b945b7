//! Bakery DTOs for API requests and responses.

use crate::models::{BakedGood, Bakery, NewBakery, UpdateBakery};
use crate::services::BakeryWithGoods;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::baked_good::{BakedGoodResponse, format_timestamp};

// ============================================================================
// Request DTOs
// ============================================================================

/// Request body for creating a bakery.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateBakeryRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be between 1 and 255 characters"))]
    #[schema(min_length = 1, max_length = 255, example = "Crumbs & Co")]
    pub name: String,
}

impl CreateBakeryRequest {
    pub fn into_new_bakery(self) -> NewBakery {
        NewBakery { name: self.name }
    }
}

/// Request body for renaming a bakery.
///
/// Only `name` is accepted; any other key, including the legacy
/// `"My Bakery"`, is rejected.
#[derive(Debug, Deserialize, ToSchema, Validate)]
#[serde(deny_unknown_fields)]
pub struct UpdateBakeryRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be between 1 and 255 characters"))]
    #[schema(min_length = 1, max_length = 255, example = "Crumbs & Co")]
    pub name: String,
}

impl UpdateBakeryRequest {
    pub fn into_update_bakery(self) -> UpdateBakery {
        UpdateBakery {
            name: Some(self.name),
        }
    }
}

// ============================================================================
// Response DTOs
// ============================================================================

/// Bakery with its baked goods. Nested goods never embed the bakery again.
#[derive(Debug, Serialize, ToSchema)]
pub struct BakeryResponse {
    pub id: i32,
    pub name: String,
    #[schema(example = "2024-06-01T12:00:00.000Z")]
    pub created_at: String,
    #[schema(example = "2024-06-01T12:00:00.000Z")]
    pub updated_at: String,
    pub baked_goods: Vec<BakedGoodResponse>,
}

impl BakeryResponse {
    fn build(bakery: Bakery, baked_goods: Vec<BakedGood>) -> Self {
        Self {
            id: bakery.id,
            name: bakery.name,
            created_at: format_timestamp(&bakery.created_at),
            updated_at: format_timestamp(&bakery.updated_at),
            baked_goods: baked_goods.into_iter().map(BakedGoodResponse::from).collect(),
        }
    }
}

impl From<BakeryWithGoods> for BakeryResponse {
    fn from(value: BakeryWithGoods) -> Self {
        Self::build(value.bakery, value.baked_goods)
    }
}

/// A freshly created bakery owns no goods yet.
impl From<Bakery> for BakeryResponse {
    fn from(bakery: Bakery) -> Self {
        Self::build(bakery, Vec::new())
    }
}
