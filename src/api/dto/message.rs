//! Plain acknowledgement DTO.

use serde::Serialize;
use utoipa::ToSchema;

/// `{"message": ...}` body returned by update and delete endpoints.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Bakery updated successfully")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}
