//! Tests for the review endpoints.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use pokemon_review::{
    model::{api::ErrorDto, review::ReviewDto},
    server::controller::review::{
        create_review, delete_review, get_review, get_reviews, get_reviews_of_pokemon,
        update_review, CreateReviewParams,
    },
};

use super::*;

fn review(id: i32, title: &str, rating: i32) -> ReviewDto {
    ReviewDto {
        id,
        title: title.to_string(),
        text: "Very electric".to_string(),
        rating,
    }
}

/// Expect 200 with the created review listed under its Pokemon
#[tokio::test]
async fn creates_review_for_pokemon() -> Result<(), TestError> {
    let (test, state) = setup().await?;
    let pokemon = test.pokemon().insert_mock_pokemon("Pikachu").await?;
    let reviewer = test.review().insert_mock_reviewer("Ash", "Ketchum").await?;

    let params = CreateReviewParams {
        reviewer_id: reviewer.id,
        poke_id: pokemon.id,
    };
    let resp = create_review(
        State(state.clone()),
        Ok(Query(params)),
        Ok(Json(review(0, "Shocking", 5))),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);

    let resp = get_reviews_of_pokemon(State(state), Ok(Path(pokemon.id)))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let reviews: Vec<ReviewDto> = read_json(resp).await;
    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0], review(reviews[0].id, "Shocking", 5));

    Ok(())
}

/// Expect 400 for a rating outside 1 to 5
#[tokio::test]
async fn rejects_out_of_range_rating() -> Result<(), TestError> {
    let (test, state) = setup().await?;
    let pokemon = test.pokemon().insert_mock_pokemon("Pikachu").await?;
    let reviewer = test.review().insert_mock_reviewer("Ash", "Ketchum").await?;

    let params = CreateReviewParams {
        reviewer_id: reviewer.id,
        poke_id: pokemon.id,
    };
    let resp = create_review(State(state), Ok(Query(params)), Ok(Json(review(0, "Meh", 6))))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 404 when the reviewer does not exist
#[tokio::test]
async fn rejects_missing_reviewer() -> Result<(), TestError> {
    let (test, state) = setup().await?;
    let pokemon = test.pokemon().insert_mock_pokemon("Pikachu").await?;

    let params = CreateReviewParams {
        reviewer_id: 12,
        poke_id: pokemon.id,
    };
    let resp = create_review(
        State(state),
        Ok(Query(params)),
        Ok(Json(review(0, "Shocking", 4))),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: ErrorDto = read_json(resp).await;
    assert_eq!(body.errors, vec!["Reviewer ID 12 not found".to_string()]);

    Ok(())
}

/// Expect 422 for a second review with the same title
#[tokio::test]
async fn rejects_duplicate_title() -> Result<(), TestError> {
    let (test, state) = setup().await?;
    let pokemon = test.pokemon().insert_mock_pokemon("Pikachu").await?;
    let reviewer = test.review().insert_mock_reviewer("Ash", "Ketchum").await?;
    test.review()
        .insert_mock_review("Shocking", 5, pokemon.id, reviewer.id)
        .await?;

    let params = CreateReviewParams {
        reviewer_id: reviewer.id,
        poke_id: pokemon.id,
    };
    let resp = create_review(
        State(state),
        Ok(Query(params)),
        Ok(Json(review(0, "shocking", 3))),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    Ok(())
}

/// Expect 200 with an empty list when listing reviews of an unknown Pokemon
#[tokio::test]
async fn lists_no_reviews_for_missing_pokemon() -> Result<(), TestError> {
    let (_test, state) = setup().await?;

    let resp = get_reviews_of_pokemon(State(state), Ok(Path(999)))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let reviews: Vec<ReviewDto> = read_json(resp).await;
    assert!(reviews.is_empty());

    Ok(())
}

/// Expect 204 and the new title stored while the Pokemon link is kept
#[tokio::test]
async fn updates_review() -> Result<(), TestError> {
    let (test, state) = setup().await?;
    let pokemon = test.pokemon().insert_mock_pokemon("Pikachu").await?;
    let reviewer = test.review().insert_mock_reviewer("Ash", "Ketchum").await?;
    let existing = test
        .review()
        .insert_mock_review("Shocking", 5, pokemon.id, reviewer.id)
        .await?;

    let resp = update_review(
        State(state.clone()),
        Ok(Path(existing.id)),
        Ok(Json(review(existing.id, "Still shocking", 4))),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = get_reviews_of_pokemon(State(state), Ok(Path(pokemon.id)))
        .await
        .into_response();
    let reviews: Vec<ReviewDto> = read_json(resp).await;
    assert_eq!(reviews, vec![review(existing.id, "Still shocking", 4)]);

    Ok(())
}

/// Expect 204 then 404 for the deleted review
#[tokio::test]
async fn deletes_review() -> Result<(), TestError> {
    let (test, state) = setup().await?;
    let pokemon = test.pokemon().insert_mock_pokemon("Pikachu").await?;
    let reviewer = test.review().insert_mock_reviewer("Ash", "Ketchum").await?;
    let existing = test
        .review()
        .insert_mock_review("Shocking", 5, pokemon.id, reviewer.id)
        .await?;

    let resp = delete_review(State(state.clone()), Ok(Path(existing.id)))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = get_review(State(state.clone()), Ok(Path(existing.id)))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = get_reviews(State(state)).await.into_response();
    let reviews: Vec<ReviewDto> = read_json(resp).await;
    assert!(reviews.is_empty());

    Ok(())
}
