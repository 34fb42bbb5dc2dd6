use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query,
    },
    Json,
};

use crate::server::error::resource::ResourceError;

/// Unwraps a JSON body, turning a missing or malformed body into a 400 error body
pub fn require_payload<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ResourceError> {
    match payload {
        Ok(Json(payload)) => Ok(payload),
        Err(rejection) => Err(ResourceError::InvalidPayload(rejection.body_text())),
    }
}

/// Unwraps a path parameter, turning a non-numeric ID into a 400 error body
pub fn require_path<T>(path: Result<Path<T>, PathRejection>) -> Result<T, ResourceError> {
    match path {
        Ok(Path(path)) => Ok(path),
        Err(rejection) => Err(ResourceError::InvalidPayload(rejection.body_text())),
    }
}

/// Unwraps query parameters, turning missing or non-numeric IDs into a 400 error body
pub fn require_query<T>(query: Result<Query<T>, QueryRejection>) -> Result<T, ResourceError> {
    match query {
        Ok(Query(query)) => Ok(query),
        Err(rejection) => Err(ResourceError::InvalidPayload(rejection.body_text())),
    }
}
