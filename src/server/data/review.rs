use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, QueryFilter, QueryOrder,
};

pub struct ReviewRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ReviewRepository<'a, C> {
    /// Creates a new instance of [`ReviewRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<entity::review::Model>, DbErr> {
        entity::prelude::Review::find()
            .order_by_asc(entity::review::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(&self, review_id: i32) -> Result<Option<entity::review::Model>, DbErr> {
        entity::prelude::Review::find_by_id(review_id)
            .one(self.db)
            .await
    }

    pub async fn exists(&self, review_id: i32) -> Result<bool, DbErr> {
        Ok(self.get_by_id(review_id).await?.is_some())
    }

    pub async fn get_by_pokemon(
        &self,
        pokemon_id: i32,
    ) -> Result<Vec<entity::review::Model>, DbErr> {
        entity::prelude::Review::find()
            .filter(entity::review::Column::PokemonId.eq(pokemon_id))
            .order_by_asc(entity::review::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_reviewer(
        &self,
        reviewer_id: i32,
    ) -> Result<Vec<entity::review::Model>, DbErr> {
        entity::prelude::Review::find()
            .filter(entity::review::Column::ReviewerId.eq(reviewer_id))
            .order_by_asc(entity::review::Column::Id)
            .all(self.db)
            .await
    }

    /// Creates a review of `pokemon_id` written by `reviewer_id`
    pub async fn create(
        &self,
        review: entity::review::ActiveModel,
        pokemon_id: i32,
        reviewer_id: i32,
    ) -> Result<entity::review::Model, DbErr> {
        let mut review = review;
        review.id = ActiveValue::NotSet;
        review.pokemon_id = ActiveValue::Set(pokemon_id);
        review.reviewer_id = ActiveValue::Set(reviewer_id);

        review.insert(self.db).await
    }

    /// Replaces the title, text & rating of the review with the provided ID
    ///
    /// The reviewed Pokemon and the author are kept. Returns `Ok(None)` if no review has
    /// that ID.
    pub async fn update(
        &self,
        review_id: i32,
        review: entity::review::ActiveModel,
    ) -> Result<Option<entity::review::Model>, DbErr> {
        if !self.exists(review_id).await? {
            return Ok(None);
        }

        let mut review = review;
        review.id = ActiveValue::Unchanged(review_id);
        review.pokemon_id = ActiveValue::NotSet;
        review.reviewer_id = ActiveValue::NotSet;

        let review = review.update(self.db).await?;

        Ok(Some(review))
    }

    /// Deletes a review
    ///
    /// Returns OK regardless of review existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, review_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Review::delete_by_id(review_id)
            .exec(self.db)
            .await
    }

    /// Deletes every review with an ID in `review_ids`
    pub async fn delete_many(&self, review_ids: Vec<i32>) -> Result<DeleteResult, DbErr> {
        entity::prelude::Review::delete_many()
            .filter(entity::review::Column::Id.is_in(review_ids))
            .exec(self.db)
            .await
    }
}
