use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::{ErrorDto, CREATED_MESSAGE},
        review::ReviewDto,
    },
    server::{
        controller::util::{
            extract::{require_path, require_payload, require_query},
            validate::{ensure_id_matches, require_text, validate_rating},
        },
        error::{resource::ResourceError, Error},
        mapper::map_all,
        model::app::AppState,
        service::review::ReviewService,
    },
};

pub static REVIEW_TAG: &str = "review";

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct CreateReviewParams {
    /// ID of the reviewer writing the review
    pub reviewer_id: i32,
    /// ID of the reviewed Pokemon
    pub poke_id: i32,
}

fn validate_review(review: &ReviewDto) -> Result<(), ResourceError> {
    require_text("title", &review.title)?;
    require_text("text", &review.text)?;
    validate_rating(review.rating)
}

/// Get every review
#[utoipa::path(
    get,
    path = "/api/review",
    tag = REVIEW_TAG,
    responses(
        (status = 200, description = "Every review", body = Vec<ReviewDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reviews(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let reviews = ReviewService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(map_all::<_, ReviewDto>(reviews))))
}

/// Get a review by ID
#[utoipa::path(
    get,
    path = "/api/review/{id}",
    tag = REVIEW_TAG,
    params(("id" = i32, Path, description = "Review ID")),
    responses(
        (status = 200, description = "The review", body = ReviewDto),
        (status = 404, description = "Review not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_review(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let review_id = require_path(path)?;
    let review = ReviewService::new(&state.db).get(review_id).await?;

    Ok((StatusCode::OK, Json(ReviewDto::from(review))))
}

/// Get every review of a Pokemon
///
/// An unknown Pokemon has no reviews, the list is then empty.
#[utoipa::path(
    get,
    path = "/api/review/pokemon/{pokeId}",
    tag = REVIEW_TAG,
    params(("pokeId" = i32, Path, description = "Pokemon ID")),
    responses(
        (status = 200, description = "Reviews of the Pokemon, empty for an unknown Pokemon", body = Vec<ReviewDto>),
        (status = 400, description = "Invalid Pokemon ID", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reviews_of_pokemon(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let pokemon_id = require_path(path)?;
    let reviews = ReviewService::new(&state.db)
        .get_by_pokemon(pokemon_id)
        .await?;

    Ok((StatusCode::OK, Json(map_all::<_, ReviewDto>(reviews))))
}

/// Create a review of Pokemon `pokeId` by reviewer `reviewerId`
#[utoipa::path(
    post,
    path = "/api/review",
    tag = REVIEW_TAG,
    params(CreateReviewParams),
    request_body = ReviewDto,
    responses(
        (status = 200, description = "Review created", body = String),
        (status = 400, description = "Invalid request", body = ErrorDto),
        (status = 404, description = "Pokemon or reviewer not found", body = ErrorDto),
        (status = 422, description = "Review already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_review(
    State(state): State<AppState>,
    query: Result<Query<CreateReviewParams>, QueryRejection>,
    payload: Result<Json<ReviewDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let params = require_query(query)?;
    let review = require_payload(payload)?;
    validate_review(&review)?;

    ReviewService::new(&state.db)
        .create(review.into(), params.reviewer_id, params.poke_id)
        .await?;

    Ok((StatusCode::OK, CREATED_MESSAGE))
}

/// Update a review
///
/// The reviewed Pokemon and the reviewer cannot be changed.
#[utoipa::path(
    put,
    path = "/api/review/{id}",
    tag = REVIEW_TAG,
    params(("id" = i32, Path, description = "Review ID")),
    request_body = ReviewDto,
    responses(
        (status = 204, description = "Review updated"),
        (status = 400, description = "Invalid request or ID mismatch", body = ErrorDto),
        (status = 404, description = "Review not found", body = ErrorDto),
        (status = 422, description = "Another review has that title", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_review(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<ReviewDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let review_id = require_path(path)?;
    let review = require_payload(payload)?;
    validate_review(&review)?;
    ensure_id_matches(review_id, review.id)?;

    ReviewService::new(&state.db)
        .update(review_id, review.into())
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a review
#[utoipa::path(
    delete,
    path = "/api/review/{id}",
    tag = REVIEW_TAG,
    params(("id" = i32, Path, description = "Review ID")),
    responses(
        (status = 204, description = "Review deleted"),
        (status = 404, description = "Review not found", body = ErrorDto),
        (status = 500, description = "Review could not be deleted", body = ErrorDto)
    ),
)]
pub async fn delete_review(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let review_id = require_path(path)?;
    ReviewService::new(&state.db).delete(review_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
