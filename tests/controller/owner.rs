//! Tests for the owner endpoints.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use pokemon_review::{
    model::{country::CountryDto, owner::OwnerDto, pokemon::PokemonDto},
    server::controller::{
        country::get_country_of_owner,
        owner::{
            create_owner, delete_owner, get_owner, get_owners, get_owners_of_pokemon,
            get_pokemon_by_owner, update_owner, CreateOwnerParams, UpdateOwnerParams,
        },
        pokemon::get_pokemon,
    },
};

use super::*;

fn owner(id: i32, name: &str) -> OwnerDto {
    OwnerDto {
        id,
        name: name.to_string(),
        gym: "Cerulean Gym".to_string(),
    }
}

/// Expect 200 and the owner living in the given country
#[tokio::test]
async fn creates_owner_in_country() -> Result<(), TestError> {
    let (test, state) = setup().await?;
    let kanto = test.owner().insert_mock_country("Kanto").await?;

    let params = CreateOwnerParams {
        country_id: kanto.id,
    };
    let resp = create_owner(
        State(state.clone()),
        Ok(Query(params)),
        Ok(Json(owner(0, "Misty"))),
    )
    .await
    .into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = get_owners(State(state.clone())).await.into_response();
    let owners: Vec<OwnerDto> = read_json(resp).await;
    assert_eq!(owners.len(), 1);
    assert_eq!(owners[0], owner(owners[0].id, "Misty"));

    let resp = get_country_of_owner(State(state), Ok(Path(owners[0].id)))
        .await
        .into_response();
    let country: CountryDto = read_json(resp).await;
    assert_eq!(country.id, kanto.id);

    Ok(())
}

/// Expect 404 when the country does not exist
#[tokio::test]
async fn rejects_missing_country() -> Result<(), TestError> {
    let (_test, state) = setup().await?;

    let params = CreateOwnerParams { country_id: 4 };
    let resp = create_owner(State(state), Ok(Query(params)), Ok(Json(owner(0, "Misty"))))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 422 for a second owner with the same name
#[tokio::test]
async fn rejects_duplicate_owner() -> Result<(), TestError> {
    let (test, state) = setup().await?;
    let (_, kanto) = test.owner().insert_owner_with_mock_country("Misty").await?;

    let params = CreateOwnerParams {
        country_id: kanto.id,
    };
    let resp = create_owner(State(state), Ok(Query(params)), Ok(Json(owner(0, "misty "))))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    Ok(())
}

/// Expect the Pokemon of the owner and the owners of the Pokemon
#[tokio::test]
async fn lists_relations_in_both_directions() -> Result<(), TestError> {
    let (test, state) = setup().await?;
    let (pikachu, ash, _) = test.pokemon().insert_owned_pokemon("Pikachu").await?;

    let resp = get_pokemon_by_owner(State(state.clone()), Ok(Path(ash.id)))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let pokemons: Vec<PokemonDto> = read_json(resp).await;
    assert_eq!(pokemons.len(), 1);
    assert_eq!(pokemons[0].id, pikachu.id);

    let resp = get_owners_of_pokemon(State(state), Ok(Path(pikachu.id)))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let owners: Vec<OwnerDto> = read_json(resp).await;
    assert_eq!(owners.len(), 1);
    assert_eq!(owners[0].id, ash.id);

    Ok(())
}

/// Expect 204 and the owner moved to the new country
#[tokio::test]
async fn updates_owner_and_moves_country() -> Result<(), TestError> {
    let (test, state) = setup().await?;
    let (existing, _) = test.owner().insert_owner_with_mock_country("Mitsy").await?;
    let johto = test.owner().insert_mock_country("Johto").await?;

    let params = UpdateOwnerParams {
        country_id: Some(johto.id),
    };
    let resp = update_owner(
        State(state.clone()),
        Ok(Path(existing.id)),
        Ok(Query(params)),
        Ok(Json(owner(existing.id, "Misty"))),
    )
    .await
    .into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = get_owner(State(state.clone()), Ok(Path(existing.id)))
        .await
        .into_response();
    let updated: OwnerDto = read_json(resp).await;
    assert_eq!(updated, owner(existing.id, "Misty"));

    let resp = get_country_of_owner(State(state), Ok(Path(existing.id)))
        .await
        .into_response();
    let country: CountryDto = read_json(resp).await;
    assert_eq!(country.id, johto.id);

    Ok(())
}

/// Expect the owner gone while their Pokemon are kept
#[tokio::test]
async fn deletes_owner_keeping_pokemon() -> Result<(), TestError> {
    let (test, state) = setup().await?;
    let (pikachu, ash, _) = test.pokemon().insert_owned_pokemon("Pikachu").await?;

    let resp = delete_owner(State(state.clone()), Ok(Path(ash.id)))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = get_owner(State(state.clone()), Ok(Path(ash.id)))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = get_pokemon(State(state), Ok(Path(pikachu.id)))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect the owner's links kept when deleting the owner itself fails
#[tokio::test]
async fn keeps_links_when_owner_deletion_fails() -> Result<(), TestError> {
    use sea_orm::ConnectionTrait;

    let (test, state) = setup().await?;
    let (pikachu, ash, _) = test.pokemon().insert_owned_pokemon("Pikachu").await?;
    test.db
        .execute_unprepared(
            "CREATE TRIGGER owner_locked BEFORE DELETE ON owner \
             BEGIN SELECT RAISE(ABORT, 'owner locked'); END;",
        )
        .await?;

    let resp = delete_owner(State(state.clone()), Ok(Path(ash.id)))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let resp = get_pokemon_by_owner(State(state), Ok(Path(ash.id)))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let pokemons: Vec<PokemonDto> = read_json(resp).await;
    assert_eq!(pokemons.len(), 1);
    assert_eq!(pokemons[0].id, pikachu.id);

    Ok(())
}
