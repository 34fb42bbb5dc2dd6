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
        category::CategoryDto,
        pokemon::PokemonDto,
    },
    server::{
        controller::util::{
            extract::{require_path, require_payload},
            validate::{ensure_id_matches, require_text},
        },
        error::Error,
        mapper::map_all,
        model::app::AppState,
        service::{category::CategoryService, pokemon::PokemonService},
    },
};

pub static CATEGORY_TAG: &str = "category";

/// Get every category
#[utoipa::path(
    get,
    path = "/api/category",
    tag = CATEGORY_TAG,
    responses(
        (status = 200, description = "Every category", body = Vec<CategoryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_categories(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let categories = CategoryService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(map_all::<_, CategoryDto>(categories))))
}

/// Get a category by ID
#[utoipa::path(
    get,
    path = "/api/category/{id}",
    tag = CATEGORY_TAG,
    params(("id" = i32, Path, description = "Category ID")),
    responses(
        (status = 200, description = "The category", body = CategoryDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_category(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let category_id = require_path(path)?;
    let category = CategoryService::new(&state.db).get(category_id).await?;

    Ok((StatusCode::OK, Json(CategoryDto::from(category))))
}

/// Get every Pokemon in a category
#[utoipa::path(
    get,
    path = "/api/category/{id}/pokemon",
    tag = CATEGORY_TAG,
    params(("id" = i32, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Pokemon in the category", body = Vec<PokemonDto>),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_pokemon_by_category(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let category_id = require_path(path)?;
    let pokemons = PokemonService::new(&state.db)
        .get_by_category(category_id)
        .await?;

    Ok((StatusCode::OK, Json(map_all::<_, PokemonDto>(pokemons))))
}

/// Create a category
#[utoipa::path(
    post,
    path = "/api/category",
    tag = CATEGORY_TAG,
    request_body = CategoryDto,
    responses(
        (status = 200, description = "Category created", body = String),
        (status = 400, description = "Invalid request", body = ErrorDto),
        (status = 422, description = "Category already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_category(
    State(state): State<AppState>,
    payload: Result<Json<CategoryDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let category = require_payload(payload)?;
    require_text("name", &category.name)?;

    CategoryService::new(&state.db)
        .create(category.into())
        .await?;

    Ok((StatusCode::OK, CREATED_MESSAGE))
}

/// Update a category
#[utoipa::path(
    put,
    path = "/api/category/{id}",
    tag = CATEGORY_TAG,
    params(("id" = i32, Path, description = "Category ID")),
    request_body = CategoryDto,
    responses(
        (status = 204, description = "Category updated"),
        (status = 400, description = "Invalid request or ID mismatch", body = ErrorDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 422, description = "Another category has that name", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_category(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<CategoryDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let category_id = require_path(path)?;
    let category = require_payload(payload)?;
    require_text("name", &category.name)?;
    ensure_id_matches(category_id, category.id)?;

    CategoryService::new(&state.db)
        .update(category_id, category.into())
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a category
///
/// Pokemon in the category are kept, only their link to it is removed.
#[utoipa::path(
    delete,
    path = "/api/category/{id}",
    tag = CATEGORY_TAG,
    params(("id" = i32, Path, description = "Category ID")),
    responses(
        (status = 204, description = "Category deleted"),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 500, description = "Category could not be deleted", body = ErrorDto)
    ),
)]
pub async fn delete_category(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let category_id = require_path(path)?;
    CategoryService::new(&state.db).delete(category_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
