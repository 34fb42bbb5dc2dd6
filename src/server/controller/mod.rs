//! HTTP controller endpoints for the Pokemon review API.
//!
//! One module per resource. Handlers validate the shape of the request, call the matching
//! service and map the returned entity models into DTOs. Each handler carries a utoipa
//! annotation so it shows up in the OpenAPI document.

pub mod category;
pub mod country;
pub mod owner;
pub mod pokemon;
pub mod review;
pub mod reviewer;
pub mod util;
