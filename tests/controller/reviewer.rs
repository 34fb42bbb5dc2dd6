//! Tests for the reviewer endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use pokemon_review::{
    model::{review::ReviewDto, reviewer::ReviewerDto},
    server::controller::{
        review::get_review,
        reviewer::{
            create_reviewer, delete_reviewer, get_reviewer, get_reviewers,
            get_reviews_by_reviewer, update_reviewer,
        },
    },
};

use super::*;

fn reviewer(id: i32, first_name: &str, last_name: &str) -> ReviewerDto {
    ReviewerDto {
        id,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
    }
}

/// Expect 200 and the reviewer listed afterwards
#[tokio::test]
async fn creates_reviewer() -> Result<(), TestError> {
    let (_test, state) = setup().await?;

    let resp = create_reviewer(State(state.clone()), Ok(Json(reviewer(0, "Ash", "Ketchum"))))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = get_reviewers(State(state)).await.into_response();
    let reviewers: Vec<ReviewerDto> = read_json(resp).await;
    assert_eq!(reviewers.len(), 1);
    assert_eq!(reviewers[0], reviewer(reviewers[0].id, "Ash", "Ketchum"));

    Ok(())
}

/// Expect 422 for a reviewer with the same full name
#[tokio::test]
async fn rejects_duplicate_full_name() -> Result<(), TestError> {
    let (test, state) = setup().await?;
    test.review().insert_mock_reviewer("Ash", "Ketchum").await?;

    let resp = create_reviewer(State(state), Ok(Json(reviewer(0, " ash", "KETCHUM"))))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    Ok(())
}

/// Expect the same first name with another last name to be accepted
#[tokio::test]
async fn accepts_shared_first_name() -> Result<(), TestError> {
    let (test, state) = setup().await?;
    test.review().insert_mock_reviewer("Ash", "Ketchum").await?;

    let resp = create_reviewer(State(state), Ok(Json(reviewer(0, "Ash", "Oak"))))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect only the reviews written by the reviewer
#[tokio::test]
async fn lists_reviews_by_reviewer() -> Result<(), TestError> {
    let (test, state) = setup().await?;
    let pokemon = test.pokemon().insert_mock_pokemon("Pikachu").await?;
    let ash = test.review().insert_mock_reviewer("Ash", "Ketchum").await?;
    let gary = test.review().insert_mock_reviewer("Gary", "Oak").await?;
    let review = test
        .review()
        .insert_mock_review("Shocking", 5, pokemon.id, ash.id)
        .await?;
    test.review()
        .insert_mock_review("Overrated", 1, pokemon.id, gary.id)
        .await?;

    let resp = get_reviews_by_reviewer(State(state), Ok(Path(ash.id)))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let reviews: Vec<ReviewDto> = read_json(resp).await;
    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0].id, review.id);

    Ok(())
}

/// Expect 400 when the body ID does not match the path ID
#[tokio::test]
async fn rejects_update_with_id_mismatch() -> Result<(), TestError> {
    let (test, state) = setup().await?;
    let existing = test.review().insert_mock_reviewer("Ash", "Ketchum").await?;

    let resp = update_reviewer(
        State(state.clone()),
        Ok(Path(existing.id)),
        Ok(Json(reviewer(existing.id + 10, "Ash", "Oak"))),
    )
    .await
    .into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = get_reviewer(State(state), Ok(Path(existing.id)))
        .await
        .into_response();
    let unchanged: ReviewerDto = read_json(resp).await;
    assert_eq!(unchanged.last_name, "Ketchum");

    Ok(())
}

/// Expect the reviewer and their reviews gone
#[tokio::test]
async fn deletes_reviewer_with_reviews() -> Result<(), TestError> {
    let (test, state) = setup().await?;
    let pokemon = test.pokemon().insert_mock_pokemon("Pikachu").await?;
    let ash = test.review().insert_mock_reviewer("Ash", "Ketchum").await?;
    let review = test
        .review()
        .insert_mock_review("Shocking", 5, pokemon.id, ash.id)
        .await?;

    let resp = delete_reviewer(State(state.clone()), Ok(Path(ash.id)))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = get_reviewer(State(state.clone()), Ok(Path(ash.id)))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = get_review(State(state), Ok(Path(review.id)))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
