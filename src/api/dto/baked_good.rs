//! Baked good DTOs for API requests and responses.

use crate::models::{BakedGood, NewBakedGood};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Format used for every timestamp the API emits.
pub(crate) const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

pub(crate) fn format_timestamp(value: &jiff_diesel::DateTime) -> String {
    value.to_jiff().strftime(TIMESTAMP_FORMAT).to_string()
}

// ============================================================================
// Request DTOs
// ============================================================================

/// Request body for creating a baked good.
#[derive(Debug, Deserialize, ToSchema, Validate)]
#[schema(example = json!({
    "name": "Muffin",
    "price": 3.5,
    "description": "blueberry",
    "bakery_id": 1
}))]
pub struct CreateBakedGoodRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be between 1 and 255 characters"))]
    #[schema(min_length = 1, max_length = 255)]
    pub name: String,
    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    #[schema(minimum = 0.0)]
    pub price: f64,
    pub description: Option<String>,
    pub bakery_id: i32,
}

impl CreateBakedGoodRequest {
    /// Converts the request DTO into a NewBakedGood model for database insertion.
    pub fn into_new_baked_good(self) -> NewBakedGood {
        NewBakedGood {
            name: self.name,
            price: self.price,
            description: self.description,
            bakery_id: self.bakery_id,
        }
    }
}

// ============================================================================
// Response DTOs
// ============================================================================

/// Baked good as returned by the API. Never embeds its bakery.
#[derive(Debug, Serialize, ToSchema)]
pub struct BakedGoodResponse {
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub description: Option<String>,
    pub bakery_id: i32,
    #[schema(example = "2024-06-01T12:00:00.000Z")]
    pub created_at: String,
    #[schema(example = "2024-06-01T12:00:00.000Z")]
    pub updated_at: String,
}

impl From<BakedGood> for BakedGoodResponse {
    fn from(good: BakedGood) -> Self {
        Self {
            id: good.id,
            name: good.name,
            price: good.price,
            description: good.description,
            bakery_id: good.bakery_id,
            created_at: format_timestamp(&good.created_at),
            updated_at: format_timestamp(&good.updated_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;
    use jiff_diesel::ToDiesel;

    fn request(price: f64) -> CreateBakedGoodRequest {
        CreateBakedGoodRequest {
            name: "Muffin".to_string(),
            price,
            description: None,
            bakery_id: 1,
        }
    }

    #[test]
    fn test_price_rules() {
        assert!(request(0.0).validate().is_ok());
        assert!(request(3.5).validate().is_ok());
        assert!(request(-0.01).validate().is_err());
    }

    #[test]
    fn test_response_formats_timestamps() {
        let stamp = date(2024, 6, 1).at(12, 30, 5, 250_000_000);
        let good = BakedGood {
            id: 7,
            name: "Muffin".to_string(),
            price: 3.5,
            description: None,
            bakery_id: 1,
            created_at: stamp.to_diesel(),
            updated_at: stamp.to_diesel(),
        };

        let body = serde_json::to_value(BakedGoodResponse::from(good)).unwrap();
        assert_eq!(body["created_at"], "2024-06-01T12:30:05.250Z");
        assert!(body["description"].is_null());
        assert!(body.get("bakery").is_none());
    }
}
