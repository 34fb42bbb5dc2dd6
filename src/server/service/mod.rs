//! Service layer for business rules.
//!
//! Services sit between controllers and repositories. They turn missing records into
//! [`ResourceError::NotFound`], unique constraint violations into
//! [`ResourceError::AlreadyExists`], mutations that touched no rows into
//! [`ResourceError::PersistFailed`], and run the cascade deletes the store does not.

pub mod category;
pub mod country;
pub mod owner;
pub mod pokemon;
pub mod review;
pub mod reviewer;

use sea_orm::DeleteResult;

use crate::server::error::resource::ResourceError;

pub(crate) static UPDATE_FAILED: &str = "Something went wrong while updating";
pub(crate) static DELETE_FAILED: &str = "Something went wrong while deleting";
pub(crate) static DELETE_REVIEWS_FAILED: &str = "Something went wrong while deleting reviews";

/// Unwraps the model returned by a repository update, `None` means nothing was written
pub(crate) fn ensure_updated<T>(model: Option<T>) -> Result<T, ResourceError> {
    model.ok_or_else(|| ResourceError::persist_failed(UPDATE_FAILED))
}

/// Fails unless the delete removed at least one row
pub(crate) fn ensure_deleted(result: DeleteResult) -> Result<(), ResourceError> {
    if result.rows_affected == 0 {
        return Err(ResourceError::persist_failed(DELETE_FAILED));
    }

    Ok(())
}
