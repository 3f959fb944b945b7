//! Bakery service for business logic operations.
//!
//! Bakeries are always returned together with their baked goods, loaded in
//! one grouped query per call.

use std::sync::Arc;

use tracing::{debug, info};

use crate::error::{AppError, AppResult};
use crate::models::{BakedGood, Bakery, NewBakery, UpdateBakery};
use crate::repositories::{BakedGoodRepository, BakeryRepository};

/// A bakery paired with the goods it owns.
#[derive(Debug, Clone)]
pub struct BakeryWithGoods {
    pub bakery: Bakery,
    pub baked_goods: Vec<BakedGood>,
}

/// Bakery service for handling bakery-related business logic.
#[derive(Clone)]
pub struct BakeryService {
    bakeries: Arc<dyn BakeryRepository>,
    baked_goods: Arc<dyn BakedGoodRepository>,
}

impl BakeryService {
    pub fn new(bakeries: Arc<dyn BakeryRepository>, baked_goods: Arc<dyn BakedGoodRepository>) -> Self {
        Self { bakeries, baked_goods }
    }

    /// Lists every bakery ordered by id, each with its goods.
    pub async fn list_bakeries(&self) -> AppResult<Vec<BakeryWithGoods>> {
        let bakeries = self.bakeries.list_all().await?;
        let grouped = self.baked_goods.list_grouped_by_bakery(&bakeries).await?;
        debug!(count = bakeries.len(), "Loaded bakeries");

        Ok(bakeries
            .into_iter()
            .zip(grouped)
            .map(|(bakery, baked_goods)| BakeryWithGoods { bakery, baked_goods })
            .collect())
    }

    /// Gets one bakery with its goods.
    ///
    /// # Returns
    /// The bakery, or `NotFound` when the id is unknown
    pub async fn get_bakery(&self, id: i32) -> AppResult<BakeryWithGoods> {
        let bakery = self
            .bakeries
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Bakery", id))?;
        let baked_goods = self
            .baked_goods
            .list_grouped_by_bakery(std::slice::from_ref(&bakery))
            .await?
            .into_iter()
            .next()
            .unwrap_or_default();

        Ok(BakeryWithGoods { bakery, baked_goods })
    }

    /// Fetches a bakery without its goods.
    ///
    /// # Returns
    /// The bakery, or `NotFound` when the id is unknown
    pub async fn find_bakery(&self, id: i32) -> AppResult<Bakery> {
        self.bakeries
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Bakery", id))
    }

    /// Creates a bakery.
    pub async fn create_bakery(&self, new_bakery: NewBakery) -> AppResult<Bakery> {
        let bakery = self.bakeries.create(new_bakery).await?;
        info!(bakery_id = bakery.id, name = %bakery.name, "Bakery created");
        Ok(bakery)
    }

    /// Applies a partial update to a bakery.
    ///
    /// # Returns
    /// The updated bakery, or `NotFound` when the id is unknown
    pub async fn update_bakery(&self, id: i32, changes: UpdateBakery) -> AppResult<Bakery> {
        let bakery = self
            .bakeries
            .update(id, changes)
            .await?
            .ok_or_else(|| AppError::not_found("Bakery", id))?;
        info!(bakery_id = bakery.id, name = %bakery.name, "Bakery updated");
        Ok(bakery)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewBakedGood;
    use crate::repositories::memory::MemoryStore;

    fn service(store: &MemoryStore) -> BakeryService {
        let repos = store.repositories();
        BakeryService::new(repos.bakeries, repos.baked_goods)
    }

    #[tokio::test]
    async fn test_list_attaches_goods_to_owner() {
        let store = MemoryStore::new();
        let svc = service(&store);
        let a = svc.create_bakery(NewBakery { name: "A".into() }).await.unwrap();
        let b = svc.create_bakery(NewBakery { name: "B".into() }).await.unwrap();
        BakedGoodRepository::create(
            &store,
            NewBakedGood {
                name: "Rye".into(),
                price: 4.0,
                description: None,
                bakery_id: b.id,
            },
        )
        .await
        .unwrap();

        let listed = svc.list_bakeries().await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].bakery.id, a.id);
        assert!(listed[0].baked_goods.is_empty());
        assert_eq!(listed[1].baked_goods.len(), 1);
        assert_eq!(listed[1].baked_goods[0].name, "Rye");
    }

    #[tokio::test]
    async fn test_get_unknown_bakery_is_not_found() {
        let store = MemoryStore::new();
        let err = service(&store).get_bakery(7).await.unwrap_err();
        assert_eq!(err.to_string(), "Bakery not found");
    }

    #[tokio::test]
    async fn test_update_renames_bakery() {
        let store = MemoryStore::new();
        let svc = service(&store);
        let bakery = svc.create_bakery(NewBakery { name: "Old".into() }).await.unwrap();

        let updated = svc
            .update_bakery(bakery.id, UpdateBakery { name: Some("New".into()) })
            .await
            .unwrap();
        assert_eq!(updated.name, "New");
        assert_eq!(svc.get_bakery(bakery.id).await.unwrap().bakery.name, "New");
    }

    #[tokio::test]
    async fn test_find_bakery() {
        let store = MemoryStore::new();
        let svc = service(&store);
        let bakery = svc.create_bakery(NewBakery { name: "Plain".into() }).await.unwrap();

        assert_eq!(svc.find_bakery(bakery.id).await.unwrap().name, "Plain");
        let err = svc.find_bakery(bakery.id + 1).await.unwrap_err();
        assert_eq!(err.to_string(), "Bakery not found");
    }

    #[tokio::test]
    async fn test_update_unknown_bakery_is_not_found() {
        let store = MemoryStore::new();
        let err = service(&store)
            .update_bakery(3, UpdateBakery { name: Some("X".into()) })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }
}
