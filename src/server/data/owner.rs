use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, QueryFilter, QueryOrder,
};

pub struct OwnerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OwnerRepository<'a, C> {
    /// Creates a new instance of [`OwnerRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<entity::owner::Model>, DbErr> {
        entity::prelude::Owner::find()
            .order_by_asc(entity::owner::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(&self, owner_id: i32) -> Result<Option<entity::owner::Model>, DbErr> {
        entity::prelude::Owner::find_by_id(owner_id)
            .one(self.db)
            .await
    }

    pub async fn exists(&self, owner_id: i32) -> Result<bool, DbErr> {
        Ok(self.get_by_id(owner_id).await?.is_some())
    }

    /// Gets every owner of the provided Pokemon ID
    pub async fn get_by_pokemon(&self, pokemon_id: i32) -> Result<Vec<entity::owner::Model>, DbErr> {
        entity::prelude::Owner::find()
            .inner_join(entity::prelude::PokemonOwner)
            .filter(entity::pokemon_owner::Column::PokemonId.eq(pokemon_id))
            .order_by_asc(entity::owner::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets every owner living in the provided country ID
    pub async fn get_by_country(
        &self,
        country_id: i32,
    ) -> Result<Vec<entity::owner::Model>, DbErr> {
        entity::prelude::Owner::find()
            .filter(entity::owner::Column::CountryId.eq(country_id))
            .order_by_asc(entity::owner::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn create(
        &self,
        owner: entity::owner::ActiveModel,
        country_id: i32,
    ) -> Result<entity::owner::Model, DbErr> {
        let mut owner = owner;
        owner.id = ActiveValue::NotSet;
        owner.country_id = ActiveValue::Set(country_id);

        owner.insert(self.db).await
    }

    /// Replaces the mapped fields of the owner with the provided ID
    ///
    /// The country is only changed when `country_id` is provided. Returns `Ok(None)` if
    /// no owner has that ID.
    pub async fn update(
        &self,
        owner_id: i32,
        owner: entity::owner::ActiveModel,
        country_id: Option<i32>,
    ) -> Result<Option<entity::owner::Model>, DbErr> {
        if !self.exists(owner_id).await? {
            return Ok(None);
        }

        let mut owner = owner;
        owner.id = ActiveValue::Unchanged(owner_id);
        owner.country_id = match country_id {
            Some(country_id) => ActiveValue::Set(country_id),
            None => ActiveValue::NotSet,
        };

        Ok(Some(owner.update(self.db).await?))
    }

    /// Deletes an owner after unlinking them from every Pokemon
    pub async fn delete(&self, owner_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::PokemonOwner::delete_many()
            .filter(entity::pokemon_owner::Column::OwnerId.eq(owner_id))
            .exec(self.db)
            .await?;

        entity::prelude::Owner::delete_by_id(owner_id)
            .exec(self.db)
            .await
    }
}
