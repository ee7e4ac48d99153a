pub use super::baked_good::Entity as BakedGood;
pub use super::bakery::Entity as Bakery;
