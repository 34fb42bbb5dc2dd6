//! Tests for the Pokemon endpoints.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use pokemon_review::{
    model::{
        api::{ErrorDto, CREATED_MESSAGE},
        pokemon::PokemonDto,
    },
    server::controller::{
        pokemon::{
            create_pokemon, delete_pokemon, get_pokemon, get_pokemon_rating, get_pokemons,
            update_pokemon, CreatePokemonParams, UpdatePokemonParams,
        },
        review::get_review,
    },
};

use super::*;

fn pikachu(id: i32, name: &str) -> PokemonDto {
    PokemonDto {
        id,
        name: name.to_string(),
        birth_date: NaiveDate::from_ymd_opt(1996, 2, 27).unwrap(),
        base_experience: 112,
    }
}

mod get {
    use super::*;

    /// Expect 200 with every inserted Pokemon in ID order
    #[tokio::test]
    async fn lists_all_pokemon() -> Result<(), TestError> {
        let (test, state) = setup().await?;
        test.pokemon().insert_mock_pokemon("Pikachu").await?;
        test.pokemon().insert_mock_pokemon("Bulbasaur").await?;

        let resp = get_pokemons(State(state)).await.into_response();

        assert_eq!(resp.status(), StatusCode::OK);
        let pokemons: Vec<PokemonDto> = read_json(resp).await;
        let names: Vec<&str> = pokemons.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Pikachu", "Bulbasaur"]);

        Ok(())
    }

    /// Expect 404 for an unknown Pokemon ID
    #[tokio::test]
    async fn returns_not_found_for_missing_pokemon() -> Result<(), TestError> {
        let (_test, state) = setup().await?;

        let resp = get_pokemon(State(state), Ok(Path(42))).await.into_response();

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: ErrorDto = read_json(resp).await;
        assert_eq!(body.errors.len(), 1);

        Ok(())
    }

    /// Expect a rating of 0 when the Pokemon has no reviews
    #[tokio::test]
    async fn rating_is_zero_without_reviews() -> Result<(), TestError> {
        let (test, state) = setup().await?;
        let pokemon = test.pokemon().insert_mock_pokemon("Pikachu").await?;

        let resp = get_pokemon_rating(State(state), Ok(Path(pokemon.id)))
            .await
            .into_response();

        assert_eq!(resp.status(), StatusCode::OK);
        let rating: f64 = read_json(resp).await;
        assert_eq!(rating, 0.0);

        Ok(())
    }

    /// Expect the mean of every review rating
    #[tokio::test]
    async fn rating_is_mean_of_reviews() -> Result<(), TestError> {
        let (test, state) = setup().await?;
        let pokemon = test.pokemon().insert_mock_pokemon("Pikachu").await?;
        let reviewer = test.review().insert_mock_reviewer("Ash", "Ketchum").await?;
        test.review()
            .insert_mock_review("Great", 5, pokemon.id, reviewer.id)
            .await?;
        test.review()
            .insert_mock_review("Fine", 2, pokemon.id, reviewer.id)
            .await?;

        let resp = get_pokemon_rating(State(state), Ok(Path(pokemon.id)))
            .await
            .into_response();

        assert_eq!(resp.status(), StatusCode::OK);
        let rating: f64 = read_json(resp).await;
        assert_eq!(rating, 3.5);

        Ok(())
    }
}

mod create {
    use super::*;

    /// Expect 200 with the created message and the Pokemon readable afterwards
    #[tokio::test]
    async fn creates_pokemon() -> Result<(), TestError> {
        let (test, state) = setup().await?;
        let (owner, _) = test.owner().insert_owner_with_mock_country("Ash").await?;
        let category = test.pokemon().insert_mock_category("Electric").await?;

        let params = CreatePokemonParams {
            owner_id: owner.id,
            cat_id: category.id,
        };
        let resp = create_pokemon(
            State(state.clone()),
            Ok(Query(params)),
            Ok(Json(pikachu(0, "Pikachu"))),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(read_text(resp).await, CREATED_MESSAGE);

        let resp = get_pokemons(State(state)).await.into_response();
        let pokemons: Vec<PokemonDto> = read_json(resp).await;
        assert_eq!(pokemons.len(), 1);
        assert_eq!(pokemons[0], pikachu(pokemons[0].id, "Pikachu"));

        Ok(())
    }

    /// Expect 422 when a Pokemon with the same trimmed, case-insensitive name exists
    #[tokio::test]
    async fn rejects_duplicate_name() -> Result<(), TestError> {
        let (test, state) = setup().await?;
        test.pokemon().insert_mock_pokemon("Pikachu").await?;
        let (owner, _) = test.owner().insert_owner_with_mock_country("Ash").await?;
        let category = test.pokemon().insert_mock_category("Electric").await?;

        let params = CreatePokemonParams {
            owner_id: owner.id,
            cat_id: category.id,
        };
        let resp = create_pokemon(
            State(state),
            Ok(Query(params)),
            Ok(Json(pikachu(0, " pikachu "))),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body: ErrorDto = read_json(resp).await;
        assert_eq!(body.errors, vec!["Pokemon Already Exists!".to_string()]);

        Ok(())
    }

    /// Expect 404 when the owner does not exist, and nothing written
    #[tokio::test]
    async fn rejects_missing_owner() -> Result<(), TestError> {
        let (test, state) = setup().await?;
        let category = test.pokemon().insert_mock_category("Electric").await?;

        let params = CreatePokemonParams {
            owner_id: 99,
            cat_id: category.id,
        };
        let resp = create_pokemon(
            State(state.clone()),
            Ok(Query(params)),
            Ok(Json(pikachu(0, "Pikachu"))),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let resp = get_pokemons(State(state)).await.into_response();
        let pokemons: Vec<PokemonDto> = read_json(resp).await;
        assert!(pokemons.is_empty());

        Ok(())
    }

    /// Expect 400 for a blank name
    #[tokio::test]
    async fn rejects_blank_name() -> Result<(), TestError> {
        let (test, state) = setup().await?;
        let (owner, _) = test.owner().insert_owner_with_mock_country("Ash").await?;
        let category = test.pokemon().insert_mock_category("Electric").await?;

        let params = CreatePokemonParams {
            owner_id: owner.id,
            cat_id: category.id,
        };
        let resp = create_pokemon(State(state), Ok(Query(params)), Ok(Json(pikachu(0, "  "))))
            .await
            .into_response();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        Ok(())
    }
}

mod update {
    use super::*;

    /// Expect 204 and the new fields persisted
    #[tokio::test]
    async fn updates_pokemon() -> Result<(), TestError> {
        let (test, state) = setup().await?;
        let pokemon = test.pokemon().insert_mock_pokemon("Pichu").await?;

        let resp = update_pokemon(
            State(state.clone()),
            Ok(Path(pokemon.id)),
            Ok(Query(UpdatePokemonParams::default())),
            Ok(Json(pikachu(pokemon.id, "Pikachu"))),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let resp = get_pokemon(State(state), Ok(Path(pokemon.id)))
            .await
            .into_response();
        let updated: PokemonDto = read_json(resp).await;
        assert_eq!(updated, pikachu(pokemon.id, "Pikachu"));

        Ok(())
    }

    /// Expect 400 and no mutation when the path and body IDs differ
    #[tokio::test]
    async fn rejects_id_mismatch() -> Result<(), TestError> {
        let (test, state) = setup().await?;
        let pokemon = test.pokemon().insert_mock_pokemon("Pichu").await?;

        let resp = update_pokemon(
            State(state.clone()),
            Ok(Path(pokemon.id)),
            Ok(Query(UpdatePokemonParams::default())),
            Ok(Json(pikachu(pokemon.id + 1, "Pikachu"))),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = get_pokemon(State(state), Ok(Path(pokemon.id)))
            .await
            .into_response();
        let unchanged: PokemonDto = read_json(resp).await;
        assert_eq!(unchanged.name, "Pichu");

        Ok(())
    }

    /// Expect 404 when updating an unknown Pokemon
    #[tokio::test]
    async fn rejects_missing_pokemon() -> Result<(), TestError> {
        let (_test, state) = setup().await?;

        let resp = update_pokemon(
            State(state),
            Ok(Path(7)),
            Ok(Query(UpdatePokemonParams::default())),
            Ok(Json(pikachu(7, "Pikachu"))),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        Ok(())
    }

    /// Expect 422 when renaming onto another Pokemon's name
    #[tokio::test]
    async fn rejects_duplicate_name() -> Result<(), TestError> {
        let (test, state) = setup().await?;
        test.pokemon().insert_mock_pokemon("Pikachu").await?;
        let pichu = test.pokemon().insert_mock_pokemon("Pichu").await?;

        let resp = update_pokemon(
            State(state),
            Ok(Path(pichu.id)),
            Ok(Query(UpdatePokemonParams::default())),
            Ok(Json(pikachu(pichu.id, "PIKACHU"))),
        )
        .await
        .into_response();

        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        Ok(())
    }
}

mod delete {
    use super::*;

    /// Expect the Pokemon and its reviews to be gone afterwards
    #[tokio::test]
    async fn deletes_pokemon_and_reviews() -> Result<(), TestError> {
        let (test, state) = setup().await?;
        let (pokemon, _, _) = test.pokemon().insert_owned_pokemon("Pikachu").await?;
        let reviewer = test.review().insert_mock_reviewer("Ash", "Ketchum").await?;
        let review = test
            .review()
            .insert_mock_review("Great", 5, pokemon.id, reviewer.id)
            .await?;

        let resp = delete_pokemon(State(state.clone()), Ok(Path(pokemon.id)))
            .await
            .into_response();

        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let resp = get_pokemon(State(state.clone()), Ok(Path(pokemon.id)))
            .await
            .into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let resp = get_review(State(state), Ok(Path(review.id)))
            .await
            .into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        Ok(())
    }

    /// Expect 404 when deleting an unknown Pokemon
    #[tokio::test]
    async fn rejects_missing_pokemon() -> Result<(), TestError> {
        let (_test, state) = setup().await?;

        let resp = delete_pokemon(State(state), Ok(Path(1))).await.into_response();

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        Ok(())
    }

    /// Expect 500 with the error body when the reviews table is missing
    #[tokio::test]
    async fn reports_failure_when_store_errors() -> Result<(), TestError> {
        use entity::prelude::*;

        let test = TestBuilder::new().with_table(Pokemon).build().await?;
        let pokemon = test.pokemon().insert_mock_pokemon("Pikachu").await?;

        let resp = delete_pokemon(State(test.to_app_state()), Ok(Path(pokemon.id)))
            .await
            .into_response();

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let _: ErrorDto = read_json(resp).await;

        Ok(())
    }
}

