use crate::server::error::resource::ResourceError;

static MIN_RATING: i32 = 1;
static MAX_RATING: i32 = 5;

/// Rejects blank text for a required field
pub fn require_text(field: &str, value: &str) -> Result<(), ResourceError> {
    if value.trim().is_empty() {
        return Err(ResourceError::InvalidPayload(format!(
            "{} must not be blank",
            field
        )));
    }

    Ok(())
}

/// Ensures the ID in the request path matches the ID in the request body
pub fn ensure_id_matches(path_id: i32, body_id: i32) -> Result<(), ResourceError> {
    if path_id != body_id {
        return Err(ResourceError::IdMismatch { path_id, body_id });
    }

    Ok(())
}

pub fn validate_rating(rating: i32) -> Result<(), ResourceError> {
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(ResourceError::InvalidPayload(format!(
            "rating must be between {} and {}, got {}",
            MIN_RATING, MAX_RATING, rating
        )));
    }

    Ok(())
}
