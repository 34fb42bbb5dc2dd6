use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{review::ReviewRepository, reviewer::ReviewerRepository},
    error::{
        resource::{Resource, ResourceError},
        Error,
    },
    model::db::ReviewerModel,
    service::{ensure_deleted, ensure_updated},
};

pub struct ReviewerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewerService<'a> {
    /// Creates a new instance of [`ReviewerService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<ReviewerModel>, Error> {
        Ok(ReviewerRepository::new(self.db).get_all().await?)
    }

    pub async fn get(&self, reviewer_id: i32) -> Result<ReviewerModel, Error> {
        ReviewerRepository::new(self.db)
            .get_by_id(reviewer_id)
            .await?
            .ok_or_else(|| ResourceError::not_found(Resource::Reviewer, reviewer_id).into())
    }

    pub async fn create(
        &self,
        reviewer: entity::reviewer::ActiveModel,
    ) -> Result<ReviewerModel, Error> {
        ReviewerRepository::new(self.db)
            .create(reviewer)
            .await
            .map_err(|e| ResourceError::from_db_err(Resource::Reviewer, e))
    }

    pub async fn update(
        &self,
        reviewer_id: i32,
        reviewer: entity::reviewer::ActiveModel,
    ) -> Result<ReviewerModel, Error> {
        let reviewer_repo = ReviewerRepository::new(self.db);

        if !reviewer_repo.exists(reviewer_id).await? {
            return Err(ResourceError::not_found(Resource::Reviewer, reviewer_id).into());
        }

        let updated = reviewer_repo
            .update(reviewer_id, reviewer)
            .await
            .map_err(|e| ResourceError::from_db_err(Resource::Reviewer, e))?;

        Ok(ensure_updated(updated)?)
    }

    /// Deletes a reviewer together with every review they wrote
    ///
    /// Both deletes run in one transaction.
    pub async fn delete(&self, reviewer_id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;
        let reviewer_repo = ReviewerRepository::new(&txn);
        let review_repo = ReviewRepository::new(&txn);

        if !reviewer_repo.exists(reviewer_id).await? {
            return Err(ResourceError::not_found(Resource::Reviewer, reviewer_id).into());
        }

        let review_ids = review_repo
            .get_by_reviewer(reviewer_id)
            .await?
            .into_iter()
            .map(|review| review.id)
            .collect::<Vec<_>>();

        if !review_ids.is_empty() {
            review_repo.delete_many(review_ids).await?;
        }

        ensure_deleted(reviewer_repo.delete(reviewer_id).await?)?;

        txn.commit().await?;

        Ok(())
    }
}
