//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every API endpoint is registered here together with its utoipa specification. The
//! collected OpenAPI document is served at `/api/docs/openapi.json` and browsed through
//! Swagger UI at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// Handlers sharing a path are registered together, `routes!` requires it.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState { db });
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Pokemon Review", description = "Pokemon Review API"), tags(
        (name = controller::pokemon::POKEMON_TAG, description = "Pokemon API routes"),
        (name = controller::review::REVIEW_TAG, description = "Review API routes"),
        (name = controller::category::CATEGORY_TAG, description = "Category API routes"),
        (name = controller::country::COUNTRY_TAG, description = "Country API routes"),
        (name = controller::owner::OWNER_TAG, description = "Owner API routes"),
        (name = controller::reviewer::REVIEWER_TAG, description = "Reviewer API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        // Pokemon
        .routes(routes!(
            controller::pokemon::get_pokemons,
            controller::pokemon::create_pokemon
        ))
        .routes(routes!(
            controller::pokemon::get_pokemon,
            controller::pokemon::update_pokemon,
            controller::pokemon::delete_pokemon
        ))
        .routes(routes!(controller::pokemon::get_pokemon_rating))
        // Review
        .routes(routes!(
            controller::review::get_reviews,
            controller::review::create_review
        ))
        .routes(routes!(
            controller::review::get_review,
            controller::review::update_review,
            controller::review::delete_review
        ))
        .routes(routes!(controller::review::get_reviews_of_pokemon))
        // Category
        .routes(routes!(
            controller::category::get_categories,
            controller::category::create_category
        ))
        .routes(routes!(
            controller::category::get_category,
            controller::category::update_category,
            controller::category::delete_category
        ))
        .routes(routes!(controller::category::get_pokemon_by_category))
        // Country
        .routes(routes!(
            controller::country::get_countries,
            controller::country::create_country
        ))
        .routes(routes!(
            controller::country::get_country,
            controller::country::update_country,
            controller::country::delete_country
        ))
        .routes(routes!(controller::country::get_country_of_owner))
        .routes(routes!(controller::country::get_owners_of_country))
        // Owner
        .routes(routes!(
            controller::owner::get_owners,
            controller::owner::create_owner
        ))
        .routes(routes!(
            controller::owner::get_owner,
            controller::owner::update_owner,
            controller::owner::delete_owner
        ))
        .routes(routes!(controller::owner::get_pokemon_by_owner))
        .routes(routes!(controller::owner::get_owners_of_pokemon))
        // Reviewer
        .routes(routes!(
            controller::reviewer::get_reviewers,
            controller::reviewer::create_reviewer
        ))
        .routes(routes!(
            controller::reviewer::get_reviewer,
            controller::reviewer::update_reviewer,
            controller::reviewer::delete_reviewer
        ))
        .routes(routes!(controller::reviewer::get_reviews_by_reviewer))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
