use diesel::prelude::*;
use jiff_diesel::DateTime;
use serde::Deserialize;

use super::Bakery;

/// Baked good model for reading from database
/// `bakery_id` references `bakeries.id`; Associations enables `belonging_to` lookups
#[derive(Debug, Queryable, Selectable, Identifiable, Associations, Clone)]
#[diesel(belongs_to(Bakery))]
#[diesel(table_name = crate::schema::baked_goods)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct BakedGood {
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub description: Option<String>,
    pub bakery_id: i32,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

/// NewBakedGood model for inserting new records
#[derive(Debug, Insertable, Deserialize, Clone, PartialEq)]
#[diesel(table_name = crate::schema::baked_goods)]
pub struct NewBakedGood {
    pub name: String,
    pub price: f64,
    pub description: Option<String>,
    pub bakery_id: i32,
}
