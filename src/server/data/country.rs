use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryOrder,
};

pub struct CountryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CountryRepository<'a, C> {
    /// Creates a new instance of [`CountryRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<entity::country::Model>, DbErr> {
        entity::prelude::Country::find()
            .order_by_asc(entity::country::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(
        &self,
        country_id: i32,
    ) -> Result<Option<entity::country::Model>, DbErr> {
        entity::prelude::Country::find_by_id(country_id)
            .one(self.db)
            .await
    }

    pub async fn exists(&self, country_id: i32) -> Result<bool, DbErr> {
        Ok(self.get_by_id(country_id).await?.is_some())
    }

    /// Gets the country of an owner
    ///
    /// Returns `Ok(None)` if the owner does not exist.
    pub async fn get_by_owner(
        &self,
        owner_id: i32,
    ) -> Result<Option<entity::country::Model>, DbErr> {
        let owner = entity::prelude::Owner::find_by_id(owner_id)
            .find_also_related(entity::prelude::Country)
            .one(self.db)
            .await?;

        Ok(owner.and_then(|(_, country)| country))
    }

    pub async fn create(
        &self,
        country: entity::country::ActiveModel,
    ) -> Result<entity::country::Model, DbErr> {
        let mut country = country;
        country.id = ActiveValue::NotSet;

        country.insert(self.db).await
    }

    /// Returns `Ok(None)` if no country has the provided ID
    pub async fn update(
        &self,
        country_id: i32,
        country: entity::country::ActiveModel,
    ) -> Result<Option<entity::country::Model>, DbErr> {
        if !self.exists(country_id).await? {
            return Ok(None);
        }

        let mut country = country;
        country.id = ActiveValue::Unchanged(country_id);

        Ok(Some(country.update(self.db).await?))
    }

    /// Deletes a country
    ///
    /// Fails with a foreign key error while owners still reference the country.
    pub async fn delete(&self, country_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Country::delete_by_id(country_id)
            .exec(self.db)
            .await
    }
}
