pub use super::category::Entity as Category;
pub use super::country::Entity as Country;
pub use super::owner::Entity as Owner;
pub use super::pokemon::Entity as Pokemon;
pub use super::pokemon_category::Entity as PokemonCategory;
pub use super::pokemon_owner::Entity as PokemonOwner;
pub use super::review::Entity as Review;
pub use super::reviewer::Entity as Reviewer;
