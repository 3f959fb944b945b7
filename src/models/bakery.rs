use diesel::prelude::*;
use jiff_diesel::DateTime;
use serde::Deserialize;

/// Bakery model for reading from database
/// Derives Identifiable so baked goods can be grouped by their owner
#[derive(Debug, Queryable, Selectable, Identifiable, Clone)]
#[diesel(table_name = crate::schema::bakeries)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Bakery {
    pub id: i32,
    pub name: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

/// NewBakery model for inserting new records
#[derive(Debug, Insertable, Deserialize, Clone)]
#[diesel(table_name = crate::schema::bakeries)]
pub struct NewBakery {
    pub name: String,
}

/// UpdateBakery model for partial updates
/// None fields are left untouched by the changeset
#[derive(Debug, AsChangeset, Deserialize, Clone, Default)]
#[diesel(table_name = crate::schema::bakeries)]
pub struct UpdateBakery {
    pub name: Option<String>,
}
