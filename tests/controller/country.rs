//! Tests for the country endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use pokemon_review::{
    model::{api::ErrorDto, country::CountryDto, owner::OwnerDto},
    server::controller::country::{
        create_country, delete_country, get_countries, get_country, get_country_of_owner,
        get_owners_of_country, update_country,
    },
};

use super::*;

fn country(id: i32, name: &str) -> CountryDto {
    CountryDto {
        id,
        name: name.to_string(),
    }
}

/// Expect 200 and the country readable afterwards
#[tokio::test]
async fn creates_country() -> Result<(), TestError> {
    let (_test, state) = setup().await?;

    let resp = create_country(State(state.clone()), Ok(Json(country(0, "Kanto"))))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = get_countries(State(state)).await.into_response();
    let countries: Vec<CountryDto> = read_json(resp).await;
    assert_eq!(countries.len(), 1);
    assert_eq!(countries[0].name, "Kanto");

    Ok(())
}

/// Expect 400 when the body is missing its name
#[tokio::test]
async fn rejects_blank_country_name() -> Result<(), TestError> {
    let (_test, state) = setup().await?;

    let resp = create_country(State(state), Ok(Json(country(0, ""))))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect the owner's country
#[tokio::test]
async fn gets_country_of_owner() -> Result<(), TestError> {
    let (test, state) = setup().await?;
    let (owner, kanto) = test.owner().insert_owner_with_mock_country("Brock").await?;

    let resp = get_country_of_owner(State(state), Ok(Path(owner.id)))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let found: CountryDto = read_json(resp).await;
    assert_eq!(found, country(kanto.id, &kanto.name));

    Ok(())
}

/// Expect 404 for the country of an unknown owner
#[tokio::test]
async fn country_of_missing_owner_is_not_found() -> Result<(), TestError> {
    let (_test, state) = setup().await?;

    let resp = get_country_of_owner(State(state), Ok(Path(8)))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect every owner living in the country
#[tokio::test]
async fn lists_owners_of_country() -> Result<(), TestError> {
    let (test, state) = setup().await?;
    let (brock, kanto) = test.owner().insert_owner_with_mock_country("Brock").await?;
    let misty = test.owner().insert_mock_owner("Misty", kanto.id).await?;
    test.owner().insert_owner_with_mock_country("Gary").await?;

    let resp = get_owners_of_country(State(state), Ok(Path(kanto.id)))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let owners: Vec<OwnerDto> = read_json(resp).await;
    let ids: Vec<i32> = owners.iter().map(|o| o.id).collect();
    assert_eq!(ids, vec![brock.id, misty.id]);

    Ok(())
}

/// Expect 204 and the renamed country readable
#[tokio::test]
async fn updates_country() -> Result<(), TestError> {
    let (test, state) = setup().await?;
    let existing = test.owner().insert_mock_country("Jhoto").await?;

    let resp = update_country(
        State(state.clone()),
        Ok(Path(existing.id)),
        Ok(Json(country(existing.id, "Johto"))),
    )
    .await
    .into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = get_country(State(state), Ok(Path(existing.id)))
        .await
        .into_response();
    let updated: CountryDto = read_json(resp).await;
    assert_eq!(updated.name, "Johto");

    Ok(())
}

/// Expect 422 while owners still live in the country
#[tokio::test]
async fn rejects_deleting_country_with_owners() -> Result<(), TestError> {
    let (test, state) = setup().await?;
    let (_, kanto) = test.owner().insert_owner_with_mock_country("Brock").await?;

    let resp = delete_country(State(state.clone()), Ok(Path(kanto.id)))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let _: ErrorDto = read_json(resp).await;

    let resp = get_country(State(state), Ok(Path(kanto.id)))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 204 for a country without owners
#[tokio::test]
async fn deletes_empty_country() -> Result<(), TestError> {
    let (test, state) = setup().await?;
    let hoenn = test.owner().insert_mock_country("Hoenn").await?;

    let resp = delete_country(State(state.clone()), Ok(Path(hoenn.id)))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = get_country(State(state), Ok(Path(hoenn.id)))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
