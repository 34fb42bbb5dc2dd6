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
        service::pokemon::PokemonService,
    },
};

pub static POKEMON_TAG: &str = "pokemon";

/// Relations a new Pokemon is created with
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct CreatePokemonParams {
    /// ID of the owner of the Pokemon
    pub owner_id: i32,
    /// ID of the category of the Pokemon
    pub cat_id: i32,
}

/// Relations added to a Pokemon on update when not already present
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct UpdatePokemonParams {
    pub owner_id: Option<i32>,
    pub cat_id: Option<i32>,
}

/// Get every Pokemon
#[utoipa::path(
    get,
    path = "/api/pokemon",
    tag = POKEMON_TAG,
    responses(
        (status = 200, description = "Every Pokemon", body = Vec<PokemonDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_pokemons(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let pokemons = PokemonService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(map_all::<_, PokemonDto>(pokemons))))
}

/// Get a Pokemon by ID
#[utoipa::path(
    get,
    path = "/api/pokemon/{id}",
    tag = POKEMON_TAG,
    params(("id" = i32, Path, description = "Pokemon ID")),
    responses(
        (status = 200, description = "The Pokemon", body = PokemonDto),
        (status = 404, description = "Pokemon not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_pokemon(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let pokemon_id = require_path(path)?;
    let pokemon = PokemonService::new(&state.db).get(pokemon_id).await?;

    Ok((StatusCode::OK, Json(PokemonDto::from(pokemon))))
}

/// Get the mean review rating of a Pokemon
///
/// A Pokemon without reviews has a rating of 0.
#[utoipa::path(
    get,
    path = "/api/pokemon/{id}/rating",
    tag = POKEMON_TAG,
    params(("id" = i32, Path, description = "Pokemon ID")),
    responses(
        (status = 200, description = "Mean rating of the Pokemon's reviews", body = f64),
        (status = 404, description = "Pokemon not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_pokemon_rating(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let pokemon_id = require_path(path)?;
    let rating = PokemonService::new(&state.db).get_rating(pokemon_id).await?;

    Ok((StatusCode::OK, Json(rating)))
}

/// Create a Pokemon owned by `ownerId` in category `catId`
#[utoipa::path(
    post,
    path = "/api/pokemon",
    tag = POKEMON_TAG,
    params(CreatePokemonParams),
    request_body = PokemonDto,
    responses(
        (status = 200, description = "Pokemon created", body = String),
        (status = 400, description = "Invalid request", body = ErrorDto),
        (status = 404, description = "Owner or category not found", body = ErrorDto),
        (status = 422, description = "Pokemon already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_pokemon(
    State(state): State<AppState>,
    query: Result<Query<CreatePokemonParams>, QueryRejection>,
    payload: Result<Json<PokemonDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let params = require_query(query)?;
    let pokemon = require_payload(payload)?;
    require_text("name", &pokemon.name)?;

    PokemonService::new(&state.db)
        .create(pokemon.into(), params.owner_id, params.cat_id)
        .await?;

    Ok((StatusCode::OK, CREATED_MESSAGE))
}

/// Update a Pokemon
#[utoipa::path(
    put,
    path = "/api/pokemon/{id}",
    tag = POKEMON_TAG,
    params(("id" = i32, Path, description = "Pokemon ID"), UpdatePokemonParams),
    request_body = PokemonDto,
    responses(
        (status = 204, description = "Pokemon updated"),
        (status = 400, description = "Invalid request or ID mismatch", body = ErrorDto),
        (status = 404, description = "Pokemon, owner or category not found", body = ErrorDto),
        (status = 422, description = "Another Pokemon has that name", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_pokemon(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    query: Result<Query<UpdatePokemonParams>, QueryRejection>,
    payload: Result<Json<PokemonDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let pokemon_id = require_path(path)?;
    let params = require_query(query)?;
    let pokemon = require_payload(payload)?;
    require_text("name", &pokemon.name)?;
    ensure_id_matches(pokemon_id, pokemon.id)?;

    PokemonService::new(&state.db)
        .update(pokemon_id, pokemon.into(), params.owner_id, params.cat_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a Pokemon and its reviews
#[utoipa::path(
    delete,
    path = "/api/pokemon/{id}",
    tag = POKEMON_TAG,
    params(("id" = i32, Path, description = "Pokemon ID")),
    responses(
        (status = 204, description = "Pokemon deleted"),
        (status = 404, description = "Pokemon not found", body = ErrorDto),
        (status = 500, description = "Pokemon could not be deleted", body = ErrorDto)
    ),
)]
pub async fn delete_pokemon(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let pokemon_id = require_path(path)?;
    PokemonService::new(&state.db).delete(pokemon_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
