//! Test utilities for the Pokemon review API.
//!
//! Tests run in two phases: a [`TestBuilder`] declares which tables the in-memory SQLite
//! database needs, then the resulting [`TestContext`] exposes the connection and fixture
//! helpers for inserting records.

pub mod builder;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{TestBuilder, TestContext, TestError};
}
