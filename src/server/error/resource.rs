use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, SqlErr};

use crate::{model::api::ErrorDto, server::error::Error};

/// The kinds of record exposed by the API, used to build error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Pokemon,
    Category,
    Country,
    Owner,
    Reviewer,
    Review,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Pokemon => "Pokemon",
            Self::Category => "Category",
            Self::Country => "Country",
            Self::Owner => "Owner",
            Self::Reviewer => "Reviewer",
            Self::Review => "Review",
        };

        f.write_str(name)
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ResourceError {
    #[error("Invalid request payload: {0}")]
    InvalidPayload(String),
    #[error("Path ID {path_id} does not match body ID {body_id}")]
    IdMismatch { path_id: i32, body_id: i32 },
    #[error("{resource} ID {id} not found")]
    NotFound { resource: Resource, id: i32 },
    #[error("{0} Already Exists!")]
    AlreadyExists(Resource),
    #[error("{resource} ID {id} is still referenced by at least one {dependent}")]
    StillReferenced {
        resource: Resource,
        id: i32,
        dependent: Resource,
    },
    /// A mutation affected no rows; carries every model error recorded for the request
    #[error("{}", .0.join("; "))]
    PersistFailed(Vec<String>),
}

impl ResourceError {
    pub fn not_found(resource: Resource, id: i32) -> Self {
        Self::NotFound { resource, id }
    }

    pub fn persist_failed(message: impl Into<String>) -> Self {
        Self::PersistFailed(vec![message.into()])
    }

    /// Translates a unique constraint violation on `resource` into
    /// [`ResourceError::AlreadyExists`], passing any other database error through.
    pub fn from_db_err(resource: Resource, err: DbErr) -> Error {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => Self::AlreadyExists(resource).into(),
            _ => Error::DbErr(err),
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            Self::InvalidPayload(_) | Self::IdMismatch { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::AlreadyExists(_) | Self::StillReferenced { .. } => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            Self::PersistFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ResourceError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = match self {
            Self::PersistFailed(errors) => {
                tracing::error!(errors = ?errors, "Request did not persist any changes");

                ErrorDto { errors }
            }
            err => {
                tracing::debug!(status = %status, "{}", err);

                ErrorDto::new(err.to_string())
            }
        };

        (status, Json(body)).into_response()
    }
}
