//! SeaORM entities for the bakery schema.

pub mod prelude;

pub mod baked_good;
pub mod bakery;
