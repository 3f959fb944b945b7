//! Data Transfer Objects for API requests and responses.
//!
//! DTOs are organized by domain:
//! - `bakery` - Bakery request/response DTOs
//! - `baked_good` - Baked good request/response DTOs
//! - `error` - Common error response DTOs
//! - `health` - Health check DTOs
//! - `message` - Plain acknowledgement body

mod baked_good;
mod bakery;
mod error;
mod health;
mod message;

pub use baked_good::{BakedGoodResponse, CreateBakedGoodRequest};
pub use bakery::{BakeryResponse, CreateBakeryRequest, UpdateBakeryRequest};
pub use error::ErrorResponse;
pub use health::{ComponentHealth, HealthResponse, HealthStatus};
pub use message::MessageResponse;
