//! Baked good repository for async database operations.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use super::{BakedGoodRepository, checkout};
use crate::db::AsyncDbPool;
use crate::error::{AppError, AppResult};
use crate::models::{BakedGood, Bakery, NewBakedGood};

/// Baked good repository holding an async connection pool.
#[derive(Clone)]
pub struct PgBakedGoodRepository {
    pool: AsyncDbPool,
}

impl PgBakedGoodRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BakedGoodRepository for PgBakedGoodRepository {
    async fn create(&self, new_baked_good: NewBakedGood) -> AppResult<BakedGood> {
        use crate::schema::baked_goods::dsl::*;
        let mut conn = checkout(&self.pool).await?;

        diesel::insert_into(baked_goods)
            .values(&new_baked_good)
            .returning(BakedGood::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    async fn list_grouped_by_bakery(&self, bakeries: &[Bakery]) -> AppResult<Vec<Vec<BakedGood>>> {
        use crate::schema::baked_goods::dsl::*;
        if bakeries.is_empty() {
            return Ok(Vec::new());
        }
        let mut conn = checkout(&self.pool).await?;

        let goods = BakedGood::belonging_to(bakeries)
            .order(id.asc())
            .select(BakedGood::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)?;

        Ok(goods.grouped_by(bakeries))
    }

    async fn list_by_price(&self) -> AppResult<Vec<BakedGood>> {
        use crate::schema::baked_goods::dsl::*;
        let mut conn = checkout(&self.pool).await?;

        baked_goods
            .order((price.asc(), id.asc()))
            .select(BakedGood::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    async fn find_most_expensive(&self) -> AppResult<Option<BakedGood>> {
        use crate::schema::baked_goods::dsl::*;
        let mut conn = checkout(&self.pool).await?;

        baked_goods
            .order((price.desc(), id.asc()))
            .select(BakedGood::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    async fn delete(&self, baked_good_id: i32) -> AppResult<usize> {
        use crate::schema::baked_goods::dsl::*;
        let mut conn = checkout(&self.pool).await?;

        diesel::delete(baked_goods.filter(id.eq(baked_good_id)))
            .execute(&mut conn)
            .await
            .map_err(AppError::from)
    }
}
