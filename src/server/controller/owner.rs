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
        owner::OwnerDto,
        pokemon::PokemonDto,
    },
    server::{
        controller::util::{
            extract::{require_path, require_payload, require_query},
            validate::{ensure_id_matches, require_text},
        },
        error::Error,
        mapper::map_all,
        model::app::AppState,
        service::{owner::OwnerService, pokemon::PokemonService},
    },
};

pub static OWNER_TAG: &str = "owner";

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct CreateOwnerParams {
    /// ID of the country the owner lives in
    pub country_id: i32,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct UpdateOwnerParams {
    /// Moves the owner to this country when provided
    pub country_id: Option<i32>,
}

/// Get every owner
#[utoipa::path(
    get,
    path = "/api/owner",
    tag = OWNER_TAG,
    responses(
        (status = 200, description = "Every owner", body = Vec<OwnerDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_owners(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let owners = OwnerService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(map_all::<_, OwnerDto>(owners))))
}

/// Get an owner by ID
#[utoipa::path(
    get,
    path = "/api/owner/{id}",
    tag = OWNER_TAG,
    params(("id" = i32, Path, description = "Owner ID")),
    responses(
        (status = 200, description = "The owner", body = OwnerDto),
        (status = 404, description = "Owner not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_owner(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let owner_id = require_path(path)?;
    let owner = OwnerService::new(&state.db).get(owner_id).await?;

    Ok((StatusCode::OK, Json(OwnerDto::from(owner))))
}

/// Get every Pokemon of an owner
#[utoipa::path(
    get,
    path = "/api/owner/{id}/pokemon",
    tag = OWNER_TAG,
    params(("id" = i32, Path, description = "Owner ID")),
    responses(
        (status = 200, description = "Pokemon of the owner", body = Vec<PokemonDto>),
        (status = 404, description = "Owner not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_pokemon_by_owner(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let owner_id = require_path(path)?;
    let pokemons = PokemonService::new(&state.db).get_by_owner(owner_id).await?;

    Ok((StatusCode::OK, Json(map_all::<_, PokemonDto>(pokemons))))
}

/// Get every owner of a Pokemon
#[utoipa::path(
    get,
    path = "/api/owner/pokemon/{pokeId}",
    tag = OWNER_TAG,
    params(("pokeId" = i32, Path, description = "Pokemon ID")),
    responses(
        (status = 200, description = "Owners of the Pokemon", body = Vec<OwnerDto>),
        (status = 404, description = "Pokemon not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_owners_of_pokemon(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let pokemon_id = require_path(path)?;
    let owners = OwnerService::new(&state.db)
        .get_by_pokemon(pokemon_id)
        .await?;

    Ok((StatusCode::OK, Json(map_all::<_, OwnerDto>(owners))))
}

/// Create an owner living in `countryId`
#[utoipa::path(
    post,
    path = "/api/owner",
    tag = OWNER_TAG,
    params(CreateOwnerParams),
    request_body = OwnerDto,
    responses(
        (status = 200, description = "Owner created", body = String),
        (status = 400, description = "Invalid request", body = ErrorDto),
        (status = 404, description = "Country not found", body = ErrorDto),
        (status = 422, description = "Owner already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_owner(
    State(state): State<AppState>,
    query: Result<Query<CreateOwnerParams>, QueryRejection>,
    payload: Result<Json<OwnerDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let params = require_query(query)?;
    let owner = require_payload(payload)?;
    require_text("name", &owner.name)?;

    OwnerService::new(&state.db)
        .create(owner.into(), params.country_id)
        .await?;

    Ok((StatusCode::OK, CREATED_MESSAGE))
}

/// Update an owner
#[utoipa::path(
    put,
    path = "/api/owner/{id}",
    tag = OWNER_TAG,
    params(("id" = i32, Path, description = "Owner ID"), UpdateOwnerParams),
    request_body = OwnerDto,
    responses(
        (status = 204, description = "Owner updated"),
        (status = 400, description = "Invalid request or ID mismatch", body = ErrorDto),
        (status = 404, description = "Owner or country not found", body = ErrorDto),
        (status = 422, description = "Another owner has that name", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_owner(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    query: Result<Query<UpdateOwnerParams>, QueryRejection>,
    payload: Result<Json<OwnerDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let owner_id = require_path(path)?;
    let params = require_query(query)?;
    let owner = require_payload(payload)?;
    require_text("name", &owner.name)?;
    ensure_id_matches(owner_id, owner.id)?;

    OwnerService::new(&state.db)
        .update(owner_id, owner.into(), params.country_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete an owner
///
/// The owner's Pokemon are kept, only their link to the owner is removed.
#[utoipa::path(
    delete,
    path = "/api/owner/{id}",
    tag = OWNER_TAG,
    params(("id" = i32, Path, description = "Owner ID")),
    responses(
        (status = 204, description = "Owner deleted"),
        (status = 404, description = "Owner not found", body = ErrorDto),
        (status = 500, description = "Owner could not be deleted", body = ErrorDto)
    ),
)]
pub async fn delete_owner(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let owner_id = require_path(path)?;
    OwnerService::new(&state.db).delete(owner_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
