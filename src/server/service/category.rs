use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::category::CategoryRepository,
    error::{
        resource::{Resource, ResourceError},
        Error,
    },
    model::db::CategoryModel,
    service::{ensure_deleted, ensure_updated},
};

pub struct CategoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CategoryService<'a> {
    /// Creates a new instance of [`CategoryService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<CategoryModel>, Error> {
        Ok(CategoryRepository::new(self.db).get_all().await?)
    }

    pub async fn get(&self, category_id: i32) -> Result<CategoryModel, Error> {
        CategoryRepository::new(self.db)
            .get_by_id(category_id)
            .await?
            .ok_or_else(|| ResourceError::not_found(Resource::Category, category_id).into())
    }

    pub async fn create(
        &self,
        category: entity::category::ActiveModel,
    ) -> Result<CategoryModel, Error> {
        CategoryRepository::new(self.db)
            .create(category)
            .await
            .map_err(|e| ResourceError::from_db_err(Resource::Category, e))
    }

    pub async fn update(
        &self,
        category_id: i32,
        category: entity::category::ActiveModel,
    ) -> Result<CategoryModel, Error> {
        let category_repo = CategoryRepository::new(self.db);

        if !category_repo.exists(category_id).await? {
            return Err(ResourceError::not_found(Resource::Category, category_id).into());
        }

        let updated = category_repo
            .update(category_id, category)
            .await
            .map_err(|e| ResourceError::from_db_err(Resource::Category, e))?;

        Ok(ensure_updated(updated)?)
    }

    /// Deletes a category, unlinking it from its Pokemon
    ///
    /// The links and the category are removed in one transaction.
    pub async fn delete(&self, category_id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;
        let category_repo = CategoryRepository::new(&txn);

        if !category_repo.exists(category_id).await? {
            return Err(ResourceError::not_found(Resource::Category, category_id).into());
        }

        ensure_deleted(category_repo.delete(category_id).await?)?;

        txn.commit().await?;

        Ok(())
    }
}
