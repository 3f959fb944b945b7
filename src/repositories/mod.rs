//! Repository layer for data access operations.
//!
//! Storage is reached through the async traits below so the service layer
//! never depends on a concrete backend. `Repositories::new` wires the
//! PostgreSQL implementations; tests use the in-memory store.

mod baked_good_repo;
mod bakery_repo;
#[cfg(test)]
pub mod memory;

use std::sync::Arc;

use async_trait::async_trait;
use diesel_async::AsyncPgConnection;
use diesel_async::pooled_connection::bb8::PooledConnection;

pub use baked_good_repo::PgBakedGoodRepository;
pub use bakery_repo::PgBakeryRepository;

use crate::db::AsyncDbPool;
use crate::error::{AppError, AppResult};
use crate::models::{BakedGood, Bakery, NewBakedGood, NewBakery, UpdateBakery};

/// Storage operations on bakeries.
#[async_trait]
pub trait BakeryRepository: Send + Sync {
    /// Inserts a bakery and returns it with generated id and timestamps.
    async fn create(&self, new_bakery: NewBakery) -> AppResult<Bakery>;

    /// Finds a bakery by id.
    async fn find_by_id(&self, bakery_id: i32) -> AppResult<Option<Bakery>>;

    /// Lists all bakeries ordered by id.
    async fn list_all(&self) -> AppResult<Vec<Bakery>>;

    /// Applies `changes` and bumps `updated_at`. Returns `None` when the id is unknown.
    async fn update(&self, bakery_id: i32, changes: UpdateBakery) -> AppResult<Option<Bakery>>;
}

/// Storage operations on baked goods.
#[async_trait]
pub trait BakedGoodRepository: Send + Sync {
    /// Inserts a baked good and returns it with generated id and timestamps.
    async fn create(&self, new_baked_good: NewBakedGood) -> AppResult<BakedGood>;

    /// Loads the goods of each bakery, grouped in the same order as `bakeries`.
    async fn list_grouped_by_bakery(&self, bakeries: &[Bakery]) -> AppResult<Vec<Vec<BakedGood>>>;

    /// Lists every baked good ordered by price ascending, ties broken by id.
    async fn list_by_price(&self) -> AppResult<Vec<BakedGood>>;

    /// The baked good with the highest price; the lowest id wins a tie.
    async fn find_most_expensive(&self) -> AppResult<Option<BakedGood>>;

    /// Deletes a baked good and returns the number of affected rows (0 or 1).
    async fn delete(&self, baked_good_id: i32) -> AppResult<usize>;
}

/// Connectivity check used by the readiness endpoints.
#[async_trait]
pub trait StoreProbe: Send + Sync {
    async fn ping(&self) -> AppResult<()>;
}

/// Aggregates all repositories for convenient access.
///
/// Every member is an `Arc`, so cloning is cheap.
#[derive(Clone)]
pub struct Repositories {
    pub bakeries: Arc<dyn BakeryRepository>,
    pub baked_goods: Arc<dyn BakedGoodRepository>,
    pub probe: Arc<dyn StoreProbe>,
}

impl Repositories {
    /// Creates the PostgreSQL-backed repositories over one shared pool.
    pub fn new(pool: AsyncDbPool) -> Self {
        Self {
            bakeries: Arc::new(PgBakeryRepository::new(pool.clone())),
            baked_goods: Arc::new(PgBakedGoodRepository::new(pool.clone())),
            probe: Arc::new(PgStoreProbe { pool }),
        }
    }
}

/// Checks a connection out of the pool, mapping failures to `ConnectionPool`.
pub(crate) async fn checkout(
    pool: &AsyncDbPool,
) -> AppResult<PooledConnection<'_, AsyncPgConnection>> {
    pool.get().await.map_err(|e| AppError::ConnectionPool {
        source: anyhow::anyhow!("{}", e),
    })
}

/// Runs `SELECT 1` on a pooled connection.
pub struct PgStoreProbe {
    pool: AsyncDbPool,
}

#[async_trait]
impl StoreProbe for PgStoreProbe {
    async fn ping(&self) -> AppResult<()> {
        use diesel_async::RunQueryDsl;

        let mut conn = checkout(&self.pool).await?;
        diesel::sql_query("SELECT 1")
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(AppError::from)
    }
}
