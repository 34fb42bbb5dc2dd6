//! Server application core modules.
//!
//! Everything behind the HTTP API lives here: configuration, routing, controllers,
//! services, repositories over the sea-orm entities, and the error types that turn
//! failures into responses.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod mapper;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
