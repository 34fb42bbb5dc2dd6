//! Fixture helpers for inserting records during tests.
//!
//! - `owner` - countries and owners
//! - `pokemon` - Pokemon, categories and join rows
//! - `review` - reviewers and reviews

pub mod owner;
pub mod pokemon;
pub mod review;

/// Same key the server derives for duplicate detection
fn normalize(name: &str) -> String {
    name.trim().to_uppercase()
}
