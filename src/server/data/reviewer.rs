use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryOrder,
};

pub struct ReviewerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ReviewerRepository<'a, C> {
    /// Creates a new instance of [`ReviewerRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<entity::reviewer::Model>, DbErr> {
        entity::prelude::Reviewer::find()
            .order_by_asc(entity::reviewer::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(
        &self,
        reviewer_id: i32,
    ) -> Result<Option<entity::reviewer::Model>, DbErr> {
        entity::prelude::Reviewer::find_by_id(reviewer_id)
            .one(self.db)
            .await
    }

    pub async fn exists(&self, reviewer_id: i32) -> Result<bool, DbErr> {
        Ok(self.get_by_id(reviewer_id).await?.is_some())
    }

    pub async fn create(
        &self,
        reviewer: entity::reviewer::ActiveModel,
    ) -> Result<entity::reviewer::Model, DbErr> {
        let mut reviewer = reviewer;
        reviewer.id = ActiveValue::NotSet;

        reviewer.insert(self.db).await
    }

    /// Returns `Ok(None)` if no reviewer has the provided ID
    pub async fn update(
        &self,
        reviewer_id: i32,
        reviewer: entity::reviewer::ActiveModel,
    ) -> Result<Option<entity::reviewer::Model>, DbErr> {
        if !self.exists(reviewer_id).await? {
            return Ok(None);
        }

        let mut reviewer = reviewer;
        reviewer.id = ActiveValue::Unchanged(reviewer_id);

        Ok(Some(reviewer.update(self.db).await?))
    }

    /// Deletes a reviewer
    ///
    /// Reviews written by the reviewer must be deleted first.
    pub async fn delete(&self, reviewer_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Reviewer::delete_by_id(reviewer_id)
            .exec(self.db)
            .await
    }
}
