//! Network-facing transfer objects.
//!
//! Each DTO mirrors its persistence entity field for field, minus storage-only columns
//! such as foreign keys and normalized uniqueness keys.

pub mod api;
pub mod category;
pub mod country;
pub mod owner;
pub mod pokemon;
pub mod review;
pub mod reviewer;
