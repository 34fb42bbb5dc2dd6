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
        country::CountryDto,
        owner::OwnerDto,
    },
    server::{
        controller::util::{
            extract::{require_path, require_payload},
            validate::{ensure_id_matches, require_text},
        },
        error::Error,
        mapper::map_all,
        model::app::AppState,
        service::country::CountryService,
    },
};

pub static COUNTRY_TAG: &str = "country";

/// Get every country
#[utoipa::path(
    get,
    path = "/api/country",
    tag = COUNTRY_TAG,
    responses(
        (status = 200, description = "Every country", body = Vec<CountryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_countries(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let countries = CountryService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(map_all::<_, CountryDto>(countries))))
}

/// Get a country by ID
#[utoipa::path(
    get,
    path = "/api/country/{id}",
    tag = COUNTRY_TAG,
    params(("id" = i32, Path, description = "Country ID")),
    responses(
        (status = 200, description = "The country", body = CountryDto),
        (status = 404, description = "Country not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_country(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let country_id = require_path(path)?;
    let country = CountryService::new(&state.db).get(country_id).await?;

    Ok((StatusCode::OK, Json(CountryDto::from(country))))
}

/// Get the country an owner lives in
#[utoipa::path(
    get,
    path = "/api/country/owner/{ownerId}",
    tag = COUNTRY_TAG,
    params(("ownerId" = i32, Path, description = "Owner ID")),
    responses(
        (status = 200, description = "The owner's country", body = CountryDto),
        (status = 404, description = "Owner not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_country_of_owner(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let owner_id = require_path(path)?;
    let country = CountryService::new(&state.db).get_by_owner(owner_id).await?;

    Ok((StatusCode::OK, Json(CountryDto::from(country))))
}

/// Get every owner living in a country
#[utoipa::path(
    get,
    path = "/api/country/{id}/owners",
    tag = COUNTRY_TAG,
    params(("id" = i32, Path, description = "Country ID")),
    responses(
        (status = 200, description = "Owners living in the country", body = Vec<OwnerDto>),
        (status = 404, description = "Country not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_owners_of_country(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let country_id = require_path(path)?;
    let owners = CountryService::new(&state.db).get_owners(country_id).await?;

    Ok((StatusCode::OK, Json(map_all::<_, OwnerDto>(owners))))
}

/// Create a country
#[utoipa::path(
    post,
    path = "/api/country",
    tag = COUNTRY_TAG,
    request_body = CountryDto,
    responses(
        (status = 200, description = "Country created", body = String),
        (status = 400, description = "Invalid request", body = ErrorDto),
        (status = 422, description = "Country already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_country(
    State(state): State<AppState>,
    payload: Result<Json<CountryDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let country = require_payload(payload)?;
    require_text("name", &country.name)?;

    CountryService::new(&state.db).create(country.into()).await?;

    Ok((StatusCode::OK, CREATED_MESSAGE))
}

/// Update a country
#[utoipa::path(
    put,
    path = "/api/country/{id}",
    tag = COUNTRY_TAG,
    params(("id" = i32, Path, description = "Country ID")),
    request_body = CountryDto,
    responses(
        (status = 204, description = "Country updated"),
        (status = 400, description = "Invalid request or ID mismatch", body = ErrorDto),
        (status = 404, description = "Country not found", body = ErrorDto),
        (status = 422, description = "Another country has that name", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_country(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<CountryDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let country_id = require_path(path)?;
    let country = require_payload(payload)?;
    require_text("name", &country.name)?;
    ensure_id_matches(country_id, country.id)?;

    CountryService::new(&state.db)
        .update(country_id, country.into())
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a country without owners
#[utoipa::path(
    delete,
    path = "/api/country/{id}",
    tag = COUNTRY_TAG,
    params(("id" = i32, Path, description = "Country ID")),
    responses(
        (status = 204, description = "Country deleted"),
        (status = 404, description = "Country not found", body = ErrorDto),
        (status = 422, description = "Owners still live in the country", body = ErrorDto),
        (status = 500, description = "Country could not be deleted", body = ErrorDto)
    ),
)]
pub async fn delete_country(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let country_id = require_path(path)?;
    CountryService::new(&state.db).delete(country_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
