//! Request validation helpers shared by the controllers.
//!
//! Every helper returns [`ResourceError`](crate::server::error::resource::ResourceError) so a
//! rejected request is answered with a 400 and the standard error body.

pub mod extract;
pub mod validate;
