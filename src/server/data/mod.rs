//! Data access layer repositories.
//!
//! One repository per entity. Repositories borrow any [`sea_orm::ConnectionTrait`]
//! implementor so the same code runs against the connection pool or an open transaction.
//! Absence is reported as `Option`/`bool`, never as an error.

pub mod category;
pub mod country;
pub mod owner;
pub mod pokemon;
pub mod review;
pub mod reviewer;
