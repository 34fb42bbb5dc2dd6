//! SeaORM entity definitions for the Pokemon review store.

pub mod prelude;

pub mod category;
pub mod country;
pub mod owner;
pub mod pokemon;
pub mod pokemon_category;
pub mod pokemon_owner;
pub mod review;
pub mod reviewer;
