use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        pokemon::PokemonRepository, review::ReviewRepository, reviewer::ReviewerRepository,
    },
    error::{
        resource::{Resource, ResourceError},
        Error,
    },
    model::db::ReviewModel,
    service::{ensure_deleted, ensure_updated},
};

pub struct ReviewService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewService<'a> {
    /// Creates a new instance of [`ReviewService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<ReviewModel>, Error> {
        Ok(ReviewRepository::new(self.db).get_all().await?)
    }

    pub async fn get(&self, review_id: i32) -> Result<ReviewModel, Error> {
        ReviewRepository::new(self.db)
            .get_by_id(review_id)
            .await?
            .ok_or_else(|| ResourceError::not_found(Resource::Review, review_id).into())
    }

    /// Gets every review of a Pokemon
    ///
    /// An unknown Pokemon simply has no reviews, so this never fails with NotFound.
    pub async fn get_by_pokemon(&self, pokemon_id: i32) -> Result<Vec<ReviewModel>, Error> {
        Ok(ReviewRepository::new(self.db)
            .get_by_pokemon(pokemon_id)
            .await?)
    }

    /// Gets every review written by a reviewer
    pub async fn get_by_reviewer(&self, reviewer_id: i32) -> Result<Vec<ReviewModel>, Error> {
        if !ReviewerRepository::new(self.db).exists(reviewer_id).await? {
            return Err(ResourceError::not_found(Resource::Reviewer, reviewer_id).into());
        }

        Ok(ReviewRepository::new(self.db)
            .get_by_reviewer(reviewer_id)
            .await?)
    }

    /// Creates a review of `pokemon_id` written by `reviewer_id`
    ///
    /// # Returns
    /// - `Ok(ReviewModel)` - The created review
    /// - `Err(ResourceError::NotFound)` - Pokemon or reviewer does not exist
    /// - `Err(ResourceError::AlreadyExists)` - Another review has the same normalized title
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create(
        &self,
        review: entity::review::ActiveModel,
        reviewer_id: i32,
        pokemon_id: i32,
    ) -> Result<ReviewModel, Error> {
        if !PokemonRepository::new(self.db).exists(pokemon_id).await? {
            return Err(ResourceError::not_found(Resource::Pokemon, pokemon_id).into());
        }

        if !ReviewerRepository::new(self.db).exists(reviewer_id).await? {
            return Err(ResourceError::not_found(Resource::Reviewer, reviewer_id).into());
        }

        ReviewRepository::new(self.db)
            .create(review, pokemon_id, reviewer_id)
            .await
            .map_err(|e| ResourceError::from_db_err(Resource::Review, e))
    }

    pub async fn update(
        &self,
        review_id: i32,
        review: entity::review::ActiveModel,
    ) -> Result<ReviewModel, Error> {
        let review_repo = ReviewRepository::new(self.db);

        if !review_repo.exists(review_id).await? {
            return Err(ResourceError::not_found(Resource::Review, review_id).into());
        }

        let updated = review_repo
            .update(review_id, review)
            .await
            .map_err(|e| ResourceError::from_db_err(Resource::Review, e))?;

        Ok(ensure_updated(updated)?)
    }

    pub async fn delete(&self, review_id: i32) -> Result<(), Error> {
        let review_repo = ReviewRepository::new(self.db);

        if !review_repo.exists(review_id).await? {
            return Err(ResourceError::not_found(Resource::Review, review_id).into());
        }

        Ok(ensure_deleted(review_repo.delete(review_id).await?)?)
    }
}
