use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};

use crate::{fixtures::normalize, TestError};

pub struct ReviewFixtures<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewFixtures<'a> {
    pub(crate) fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn insert_mock_reviewer(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<entity::reviewer::Model, TestError> {
        let reviewer = entity::reviewer::ActiveModel {
            first_name: ActiveValue::Set(first_name.to_string()),
            last_name: ActiveValue::Set(last_name.to_string()),
            normalized_name: ActiveValue::Set(normalize(&format!(
                "{} {}",
                first_name.trim(),
                last_name.trim()
            ))),
            ..Default::default()
        };

        Ok(reviewer.insert(self.db).await?)
    }

    /// Insert a review of `pokemon_id` written by `reviewer_id`
    pub async fn insert_mock_review(
        &self,
        title: &str,
        rating: i32,
        pokemon_id: i32,
        reviewer_id: i32,
    ) -> Result<entity::review::Model, TestError> {
        let review = entity::review::ActiveModel {
            title: ActiveValue::Set(title.to_string()),
            normalized_title: ActiveValue::Set(normalize(title)),
            text: ActiveValue::Set(format!("Review text for {}", title)),
            rating: ActiveValue::Set(rating),
            pokemon_id: ActiveValue::Set(pokemon_id),
            reviewer_id: ActiveValue::Set(reviewer_id),
            ..Default::default()
        };

        Ok(review.insert(self.db).await?)
    }
}
