use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, QueryFilter, QueryOrder,
};

pub struct CategoryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CategoryRepository<'a, C> {
    /// Creates a new instance of [`CategoryRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<entity::category::Model>, DbErr> {
        entity::prelude::Category::find()
            .order_by_asc(entity::category::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(
        &self,
        category_id: i32,
    ) -> Result<Option<entity::category::Model>, DbErr> {
        entity::prelude::Category::find_by_id(category_id)
            .one(self.db)
            .await
    }

    pub async fn exists(&self, category_id: i32) -> Result<bool, DbErr> {
        Ok(self.get_by_id(category_id).await?.is_some())
    }

    pub async fn create(
        &self,
        category: entity::category::ActiveModel,
    ) -> Result<entity::category::Model, DbErr> {
        let mut category = category;
        category.id = ActiveValue::NotSet;

        category.insert(self.db).await
    }

    /// Returns `Ok(None)` if no category has the provided ID
    pub async fn update(
        &self,
        category_id: i32,
        category: entity::category::ActiveModel,
    ) -> Result<Option<entity::category::Model>, DbErr> {
        if !self.exists(category_id).await? {
            return Ok(None);
        }

        let mut category = category;
        category.id = ActiveValue::Unchanged(category_id);

        Ok(Some(category.update(self.db).await?))
    }

    /// Deletes a category after unlinking it from every Pokemon
    pub async fn delete(&self, category_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::PokemonCategory::delete_many()
            .filter(entity::pokemon_category::Column::CategoryId.eq(category_id))
            .exec(self.db)
            .await?;

        entity::prelude::Category::delete_by_id(category_id)
            .exec(self.db)
            .await
    }
}
