use serde::{Deserialize, Serialize};

/// Body returned for create endpoints on success
pub static CREATED_MESSAGE: &str = "Successfully created";

/// The response when an error occurs with an API request
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorDto {
    /// Model errors collected while handling the request
    pub errors: Vec<String>,
}

impl ErrorDto {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            errors: vec![error.into()],
        }
    }
}
