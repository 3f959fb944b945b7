//! Baked good service for business logic operations.

use std::sync::Arc;

use tracing::{info, warn};

use crate::error::{AppError, AppResult};
use crate::models::{BakedGood, NewBakedGood};
use crate::repositories::{BakedGoodRepository, BakeryRepository};

/// Baked good service.
///
/// Holds the bakery repository as well, to check that a new good's owner exists.
#[derive(Clone)]
pub struct BakedGoodService {
    baked_goods: Arc<dyn BakedGoodRepository>,
    bakeries: Arc<dyn BakeryRepository>,
}

impl BakedGoodService {
    pub fn new(baked_goods: Arc<dyn BakedGoodRepository>, bakeries: Arc<dyn BakeryRepository>) -> Self {
        Self { baked_goods, bakeries }
    }

    /// Creates a baked good owned by an existing bakery.
    ///
    /// # Returns
    /// The created good, or a `Validation` error when the price is negative
    /// or not finite, or when the bakery does not exist
    pub async fn create_baked_good(&self, new_baked_good: NewBakedGood) -> AppResult<BakedGood> {
        if !new_baked_good.price.is_finite() || new_baked_good.price < 0.0 {
            return Err(AppError::Validation {
                field: "price".to_string(),
                reason: "Price must be a finite number not below zero".to_string(),
            });
        }
        if self.bakeries.find_by_id(new_baked_good.bakery_id).await?.is_none() {
            warn!(bakery_id = new_baked_good.bakery_id, "Rejected baked good for unknown bakery");
            return Err(AppError::Validation {
                field: "bakery_id".to_string(),
                reason: format!("Bakery {} does not exist", new_baked_good.bakery_id),
            });
        }

        let good = self.baked_goods.create(new_baked_good).await?;
        info!(baked_good_id = good.id, bakery_id = good.bakery_id, price = good.price, "Baked good created");
        Ok(good)
    }

    /// Deletes a baked good.
    ///
    /// # Returns
    /// `NotFound` when nothing was deleted
    pub async fn delete_baked_good(&self, id: i32) -> AppResult<()> {
        let affected = self.baked_goods.delete(id).await?;
        if affected == 0 {
            return Err(AppError::not_found("Baked Good", id));
        }
        info!(baked_good_id = id, "Baked good deleted");
        Ok(())
    }

    /// All baked goods, cheapest first.
    pub async fn list_by_price(&self) -> AppResult<Vec<BakedGood>> {
        self.baked_goods.list_by_price().await
    }

    /// The most expensive baked good, or `NotFound` when there are none.
    pub async fn most_expensive(&self) -> AppResult<BakedGood> {
        self.baked_goods
            .find_most_expensive()
            .await?
            .ok_or_else(|| AppError::NotFound {
                entity: "Baked Good".to_string(),
                field: "price".to_string(),
                value: "max".to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewBakery;
    use crate::repositories::memory::MemoryStore;

    fn service(store: &MemoryStore) -> BakedGoodService {
        let repos = store.repositories();
        BakedGoodService::new(repos.baked_goods, repos.bakeries)
    }

    fn muffin(bakery_id: i32) -> NewBakedGood {
        NewBakedGood {
            name: "Muffin".into(),
            price: 3.5,
            description: Some("blueberry".into()),
            bakery_id,
        }
    }

    #[tokio::test]
    async fn test_create_requires_existing_bakery() {
        let store = MemoryStore::new();
        let err = service(&store).create_baked_good(muffin(1)).await.unwrap_err();
        match err {
            AppError::Validation { field, .. } => assert_eq!(field, "bakery_id"),
            other => panic!("Expected Validation, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_create_rejects_non_finite_price() {
        let store = MemoryStore::new();
        let bakery = BakeryRepository::create(&store, NewBakery { name: "A".into() }).await.unwrap();
        let svc = service(&store);

        for price in [f64::NAN, f64::INFINITY, -1.0] {
            let mut good = muffin(bakery.id);
            good.price = price;
            match svc.create_baked_good(good).await.unwrap_err() {
                AppError::Validation { field, .. } => assert_eq!(field, "price"),
                other => panic!("Expected Validation, got {:?}", other),
            }
        }
    }

    #[tokio::test]
    async fn test_create_then_delete() {
        let store = MemoryStore::new();
        let bakery = BakeryRepository::create(&store, NewBakery { name: "A".into() }).await.unwrap();
        let svc = service(&store);

        let good = svc.create_baked_good(muffin(bakery.id)).await.unwrap();
        assert_eq!(good.name, "Muffin");
        assert_eq!(good.description.as_deref(), Some("blueberry"));

        svc.delete_baked_good(good.id).await.unwrap();
        assert!(svc.list_by_price().await.unwrap().is_empty());

        let err = svc.delete_baked_good(good.id).await.unwrap_err();
        assert_eq!(err.to_string(), "Baked Good not found");
    }

    #[tokio::test]
    async fn test_most_expensive_on_empty_store() {
        let store = MemoryStore::new();
        let err = service(&store).most_expensive().await.unwrap_err();
        assert_eq!(err.to_string(), "Baked Good not found");
    }

    #[tokio::test]
    async fn test_most_expensive_tie_prefers_lowest_id() {
        let store = MemoryStore::new();
        let bakery = BakeryRepository::create(&store, NewBakery { name: "A".into() }).await.unwrap();
        let svc = service(&store);
        let first = svc.create_baked_good(muffin(bakery.id)).await.unwrap();
        svc.create_baked_good(muffin(bakery.id)).await.unwrap();

        assert_eq!(svc.most_expensive().await.unwrap().id, first.id);
    }
}
