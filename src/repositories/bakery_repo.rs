//! Bakery repository for async database operations.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use jiff::tz::TimeZone;
use jiff_diesel::ToDiesel;

use super::{BakeryRepository, checkout};
use crate::db::AsyncDbPool;
use crate::error::{AppError, AppResult};
use crate::models::{Bakery, NewBakery, UpdateBakery};

/// Bakery repository holding an async connection pool.
#[derive(Clone)]
pub struct PgBakeryRepository {
    pool: AsyncDbPool,
}

impl PgBakeryRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BakeryRepository for PgBakeryRepository {
    async fn create(&self, new_bakery: NewBakery) -> AppResult<Bakery> {
        use crate::schema::bakeries::dsl::*;
        let mut conn = checkout(&self.pool).await?;

        diesel::insert_into(bakeries)
            .values(&new_bakery)
            .returning(Bakery::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    async fn find_by_id(&self, bakery_id: i32) -> AppResult<Option<Bakery>> {
        use crate::schema::bakeries::dsl::*;
        let mut conn = checkout(&self.pool).await?;

        bakeries
            .filter(id.eq(bakery_id))
            .select(Bakery::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    async fn list_all(&self) -> AppResult<Vec<Bakery>> {
        use crate::schema::bakeries::dsl::*;
        let mut conn = checkout(&self.pool).await?;

        bakeries
            .order(id.asc())
            .select(Bakery::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    async fn update(&self, bakery_id: i32, changes: UpdateBakery) -> AppResult<Option<Bakery>> {
        use crate::schema::bakeries::dsl::*;
        let mut conn = checkout(&self.pool).await?;

        // Columns hold UTC wall-clock time
        let stamp = jiff::Timestamp::now().to_zoned(TimeZone::UTC).datetime();
        diesel::update(bakeries.filter(id.eq(bakery_id)))
            .set((&changes, updated_at.eq(stamp.to_diesel())))
            .returning(Bakery::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }
}
