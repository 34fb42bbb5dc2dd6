//! Pokemon review web API.
//!
//! Transfer objects shared with API consumers live in [`model`]; everything that talks to
//! the database or serves HTTP lives in [`server`].

pub mod model;
pub mod server;
