use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, CREATED_MESSAGE},
        review::ReviewDto,
        reviewer::ReviewerDto,
    },
    server::{
        controller::util::{
            extract::{require_path, require_payload},
            validate::{ensure_id_matches, require_text},
        },
        error::Error,
        mapper::map_all,
        model::app::AppState,
        service::{review::ReviewService, reviewer::ReviewerService},
    },
};

pub static REVIEWER_TAG: &str = "reviewer";

/// Get every reviewer
#[utoipa::path(
    get,
    path = "/api/reviewer",
    tag = REVIEWER_TAG,
    responses(
        (status = 200, description = "Every reviewer", body = Vec<ReviewerDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reviewers(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let reviewers = ReviewerService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(map_all::<_, ReviewerDto>(reviewers))))
}

/// Get a reviewer by ID
#[utoipa::path(
    get,
    path = "/api/reviewer/{id}",
    tag = REVIEWER_TAG,
    params(("id" = i32, Path, description = "Reviewer ID")),
    responses(
        (status = 200, description = "The reviewer", body = ReviewerDto),
        (status = 404, description = "Reviewer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reviewer(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let reviewer_id = require_path(path)?;
    let reviewer = ReviewerService::new(&state.db).get(reviewer_id).await?;

    Ok((StatusCode::OK, Json(ReviewerDto::from(reviewer))))
}

/// Get every review written by a reviewer
#[utoipa::path(
    get,
    path = "/api/reviewer/{id}/reviews",
    tag = REVIEWER_TAG,
    params(("id" = i32, Path, description = "Reviewer ID")),
    responses(
        (status = 200, description = "Reviews by the reviewer", body = Vec<ReviewDto>),
        (status = 404, description = "Reviewer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reviews_by_reviewer(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let reviewer_id = require_path(path)?;
    let reviews = ReviewService::new(&state.db)
        .get_by_reviewer(reviewer_id)
        .await?;

    Ok((StatusCode::OK, Json(map_all::<_, ReviewDto>(reviews))))
}

/// Create a reviewer
#[utoipa::path(
    post,
    path = "/api/reviewer",
    tag = REVIEWER_TAG,
    request_body = ReviewerDto,
    responses(
        (status = 200, description = "Reviewer created", body = String),
        (status = 400, description = "Invalid request", body = ErrorDto),
        (status = 422, description = "Reviewer already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_reviewer(
    State(state): State<AppState>,
    payload: Result<Json<ReviewerDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let reviewer = require_payload(payload)?;
    require_text("firstName", &reviewer.first_name)?;
    require_text("lastName", &reviewer.last_name)?;

    ReviewerService::new(&state.db)
        .create(reviewer.into())
        .await?;

    Ok((StatusCode::OK, CREATED_MESSAGE))
}

/// Update a reviewer
#[utoipa::path(
    put,
    path = "/api/reviewer/{id}",
    tag = REVIEWER_TAG,
    params(("id" = i32, Path, description = "Reviewer ID")),
    request_body = ReviewerDto,
    responses(
        (status = 204, description = "Reviewer updated"),
        (status = 400, description = "Invalid request or ID mismatch", body = ErrorDto),
        (status = 404, description = "Reviewer not found", body = ErrorDto),
        (status = 422, description = "Another reviewer has that name", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_reviewer(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<ReviewerDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let reviewer_id = require_path(path)?;
    let reviewer = require_payload(payload)?;
    require_text("firstName", &reviewer.first_name)?;
    require_text("lastName", &reviewer.last_name)?;
    ensure_id_matches(reviewer_id, reviewer.id)?;

    ReviewerService::new(&state.db)
        .update(reviewer_id, reviewer.into())
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a reviewer together with their reviews
#[utoipa::path(
    delete,
    path = "/api/reviewer/{id}",
    tag = REVIEWER_TAG,
    params(("id" = i32, Path, description = "Reviewer ID")),
    responses(
        (status = 204, description = "Reviewer deleted"),
        (status = 404, description = "Reviewer not found", body = ErrorDto),
        (status = 500, description = "Reviewer could not be deleted", body = ErrorDto)
    ),
)]
pub async fn delete_reviewer(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let reviewer_id = require_path(path)?;
    ReviewerService::new(&state.db).delete(reviewer_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
