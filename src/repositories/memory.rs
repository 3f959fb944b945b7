//! In-memory repositories for handler and service tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use jiff::tz::TimeZone;
use jiff_diesel::ToDiesel;

use super::{BakedGoodRepository, BakeryRepository, Repositories, StoreProbe};
use crate::error::AppResult;
use crate::models::{BakedGood, Bakery, NewBakedGood, NewBakery, UpdateBakery};

#[derive(Default)]
struct Tables {
    bakeries: Vec<Bakery>,
    baked_goods: Vec<BakedGood>,
    next_bakery_id: i32,
    next_baked_good_id: i32,
}

/// A single store backing both repositories, so goods and bakeries share state.
#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<Mutex<Tables>>,
}

fn now() -> jiff::civil::DateTime {
    jiff::Timestamp::now().to_zoned(TimeZone::UTC).datetime()
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repositories wired to this store.
    pub fn repositories(&self) -> Repositories {
        Repositories {
            bakeries: Arc::new(self.clone()),
            baked_goods: Arc::new(self.clone()),
            probe: Arc::new(self.clone()),
        }
    }

    fn with<R>(&self, f: impl FnOnce(&mut Tables) -> R) -> R {
        let mut tables = self.tables.lock().expect("memory store poisoned");
        f(&mut tables)
    }
}

#[async_trait]
impl BakeryRepository for MemoryStore {
    async fn create(&self, new_bakery: NewBakery) -> AppResult<Bakery> {
        Ok(self.with(|t| {
            t.next_bakery_id += 1;
            let stamp = now();
            let bakery = Bakery {
                id: t.next_bakery_id,
                name: new_bakery.name,
                created_at: stamp.to_diesel(),
                updated_at: stamp.to_diesel(),
            };
            t.bakeries.push(bakery.clone());
            bakery
        }))
    }

    async fn find_by_id(&self, bakery_id: i32) -> AppResult<Option<Bakery>> {
        Ok(self.with(|t| t.bakeries.iter().find(|b| b.id == bakery_id).cloned()))
    }

    async fn list_all(&self) -> AppResult<Vec<Bakery>> {
        Ok(self.with(|t| t.bakeries.clone()))
    }

    async fn update(&self, bakery_id: i32, changes: UpdateBakery) -> AppResult<Option<Bakery>> {
        Ok(self.with(|t| {
            let bakery = t.bakeries.iter_mut().find(|b| b.id == bakery_id)?;
            if let Some(name) = changes.name {
                bakery.name = name;
            }
            bakery.updated_at = now().to_diesel();
            Some(bakery.clone())
        }))
    }
}

#[async_trait]
impl BakedGoodRepository for MemoryStore {
    async fn create(&self, new_baked_good: NewBakedGood) -> AppResult<BakedGood> {
        Ok(self.with(|t| {
            t.next_baked_good_id += 1;
            let stamp = now();
            let good = BakedGood {
                id: t.next_baked_good_id,
                name: new_baked_good.name,
                price: new_baked_good.price,
                description: new_baked_good.description,
                bakery_id: new_baked_good.bakery_id,
                created_at: stamp.to_diesel(),
                updated_at: stamp.to_diesel(),
            };
            t.baked_goods.push(good.clone());
            good
        }))
    }

    async fn list_grouped_by_bakery(&self, bakeries: &[Bakery]) -> AppResult<Vec<Vec<BakedGood>>> {
        Ok(self.with(|t| {
            bakeries
                .iter()
                .map(|bakery| {
                    t.baked_goods
                        .iter()
                        .filter(|g| g.bakery_id == bakery.id)
                        .cloned()
                        .collect()
                })
                .collect()
        }))
    }

    async fn list_by_price(&self) -> AppResult<Vec<BakedGood>> {
        Ok(self.with(|t| {
            let mut goods = t.baked_goods.clone();
            goods.sort_by(|a, b| a.price.total_cmp(&b.price).then(a.id.cmp(&b.id)));
            goods
        }))
    }

    async fn find_most_expensive(&self) -> AppResult<Option<BakedGood>> {
        Ok(self.with(|t| {
            t.baked_goods
                .iter()
                .min_by(|a, b| b.price.total_cmp(&a.price).then(a.id.cmp(&b.id)))
                .cloned()
        }))
    }

    async fn delete(&self, baked_good_id: i32) -> AppResult<usize> {
        Ok(self.with(|t| {
            let before = t.baked_goods.len();
            t.baked_goods.retain(|g| g.id != baked_good_id);
            before - t.baked_goods.len()
        }))
    }
}

#[async_trait]
impl StoreProbe for MemoryStore {
    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn good(name: &str, price: f64, bakery_id: i32) -> NewBakedGood {
        NewBakedGood {
            name: name.to_string(),
            price,
            description: None,
            bakery_id,
        }
    }

    #[tokio::test]
    async fn test_ids_are_sequential_per_table() {
        let store = MemoryStore::new();
        let a = BakeryRepository::create(&store, NewBakery { name: "A".into() }).await.unwrap();
        let b = BakeryRepository::create(&store, NewBakery { name: "B".into() }).await.unwrap();
        let g = BakedGoodRepository::create(&store, good("Bun", 1.0, a.id)).await.unwrap();

        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert_eq!(g.id, 1);
    }

    #[tokio::test]
    async fn test_update_unknown_bakery_returns_none() {
        let store = MemoryStore::new();
        let changes = UpdateBakery { name: Some("X".into()) };
        assert!(store.update(42, changes).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_grouping_follows_bakery_order() {
        let store = MemoryStore::new();
        let a = BakeryRepository::create(&store, NewBakery { name: "A".into() }).await.unwrap();
        let b = BakeryRepository::create(&store, NewBakery { name: "B".into() }).await.unwrap();
        BakedGoodRepository::create(&store, good("Rye", 4.0, b.id)).await.unwrap();
        BakedGoodRepository::create(&store, good("Bun", 1.0, a.id)).await.unwrap();

        let grouped = store.list_grouped_by_bakery(&[b.clone(), a.clone()]).await.unwrap();
        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[0][0].name, "Rye");
        assert_eq!(grouped[1][0].name, "Bun");
    }

    #[tokio::test]
    async fn test_delete_reports_affected_rows() {
        let store = MemoryStore::new();
        let g = BakedGoodRepository::create(&store, good("Bun", 1.0, 1)).await.unwrap();
        assert_eq!(store.delete(g.id).await.unwrap(), 1);
        assert_eq!(store.delete(g.id).await.unwrap(), 0);
    }

    fn run<F: std::future::Future>(fut: F) -> F::Output {
        tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap()
            .block_on(fut)
    }

    proptest! {
        #[test]
        fn prop_by_price_is_non_decreasing(prices in prop::collection::vec(0.0f64..1000.0, 0..40)) {
            let store = MemoryStore::new();
            let listed = run(async {
                for (i, p) in prices.iter().enumerate() {
                    BakedGoodRepository::create(&store, good(&format!("g{i}"), *p, 1)).await.unwrap();
                }
                store.list_by_price().await.unwrap()
            });

            prop_assert_eq!(listed.len(), prices.len());
            for pair in listed.windows(2) {
                prop_assert!(pair[0].price <= pair[1].price);
                if pair[0].price == pair[1].price {
                    prop_assert!(pair[0].id < pair[1].id);
                }
            }
        }

        #[test]
        fn prop_most_expensive_dominates(prices in prop::collection::vec(0.0f64..1000.0, 1..40)) {
            let store = MemoryStore::new();
            let top = run(async {
                for (i, p) in prices.iter().enumerate() {
                    BakedGoodRepository::create(&store, good(&format!("g{i}"), *p, 1)).await.unwrap();
                }
                store.find_most_expensive().await.unwrap()
            });

            let top = top.unwrap();
            for p in &prices {
                prop_assert!(top.price >= *p);
            }
            let first_max = prices.iter().position(|p| *p == top.price).unwrap();
            prop_assert_eq!(top.id, first_max as i32 + 1);
        }
    }
}
