//! Database model type aliases.
//!
//! Short names for the SeaORM entity models so services and controllers don't have to
//! spell out the `entity` crate paths.

/// A Pokemon record.
///
/// # Fields (from `entity::pokemon::Model`)
/// - `id` - Primary key
/// - `name` - Display name
/// - `normalized_name` - Trimmed, upper-cased name, unique
/// - `birth_date` - Date the Pokemon was born
/// - `base_experience` - Experience granted when defeated
pub type PokemonModel = entity::pokemon::Model;

/// A Pokemon category (e.g. "Electric").
pub type CategoryModel = entity::category::Model;

/// A country owners live in.
pub type CountryModel = entity::country::Model;

/// A Pokemon owner, belonging to exactly one country.
///
/// # Fields (from `entity::owner::Model`)
/// - `id` - Primary key
/// - `name` - Owner name
/// - `normalized_name` - Trimmed, upper-cased name, unique
/// - `gym` - Gym the owner trains at
/// - `country_id` - Foreign key to the owner's country
pub type OwnerModel = entity::owner::Model;

/// Someone who writes reviews.
pub type ReviewerModel = entity::reviewer::Model;

/// A review of one Pokemon written by one reviewer.
///
/// # Fields (from `entity::review::Model`)
/// - `id` - Primary key
/// - `title` - Review title
/// - `normalized_title` - Trimmed, upper-cased title, unique
/// - `text` - Review body
/// - `rating` - Score from 1 to 5
/// - `pokemon_id` - Foreign key to the reviewed Pokemon
/// - `reviewer_id` - Foreign key to the author
pub type ReviewModel = entity::review::Model;
