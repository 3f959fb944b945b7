//! Service layer for business logic operations.
//!
//! Services encapsulate business logic and coordinate between
//! repositories and handlers.

mod baked_good_service;
mod bakery_service;

pub use baked_good_service::BakedGoodService;
pub use bakery_service::{BakeryService, BakeryWithGoods};

use std::sync::Arc;

use crate::repositories::{Repositories, StoreProbe};

/// Aggregates all services for convenient access.
///
/// This struct is designed to be used as Axum application state.
/// Cloning is cheap since every repository sits behind an `Arc`.
#[derive(Clone)]
pub struct Services {
    pub bakeries: BakeryService,
    pub baked_goods: BakedGoodService,
    pub probe: Arc<dyn StoreProbe>,
}

impl Services {
    /// Creates a new Services instance from Repositories.
    pub fn new(repos: Repositories) -> Self {
        Self {
            bakeries: BakeryService::new(repos.bakeries.clone(), repos.baked_goods.clone()),
            baked_goods: BakedGoodService::new(repos.baked_goods, repos.bakeries),
            probe: repos.probe,
        }
    }
}
