mod baked_good;
mod bakery;

pub use baked_good::{BakedGood, NewBakedGood};
pub use bakery::{Bakery, NewBakery, UpdateBakery};
