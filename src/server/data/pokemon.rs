use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

pub struct PokemonRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PokemonRepository<'a, C> {
    /// Creates a new instance of [`PokemonRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<entity::pokemon::Model>, DbErr> {
        entity::prelude::Pokemon::find()
            .order_by_asc(entity::pokemon::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(
        &self,
        pokemon_id: i32,
    ) -> Result<Option<entity::pokemon::Model>, DbErr> {
        entity::prelude::Pokemon::find_by_id(pokemon_id)
            .one(self.db)
            .await
    }

    pub async fn exists(&self, pokemon_id: i32) -> Result<bool, DbErr> {
        Ok(self.get_by_id(pokemon_id).await?.is_some())
    }

    /// Gets every Pokemon linked to the provided owner ID
    pub async fn get_by_owner(&self, owner_id: i32) -> Result<Vec<entity::pokemon::Model>, DbErr> {
        entity::prelude::Pokemon::find()
            .inner_join(entity::prelude::PokemonOwner)
            .filter(entity::pokemon_owner::Column::OwnerId.eq(owner_id))
            .order_by_asc(entity::pokemon::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets every Pokemon linked to the provided category ID
    pub async fn get_by_category(
        &self,
        category_id: i32,
    ) -> Result<Vec<entity::pokemon::Model>, DbErr> {
        entity::prelude::Pokemon::find()
            .inner_join(entity::prelude::PokemonCategory)
            .filter(entity::pokemon_category::Column::CategoryId.eq(category_id))
            .order_by_asc(entity::pokemon::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the mean rating of all reviews for a Pokemon
    ///
    /// Returns `0.0` when the Pokemon has no reviews.
    pub async fn get_rating(&self, pokemon_id: i32) -> Result<f64, DbErr> {
        let ratings: Vec<i32> = entity::prelude::Review::find()
            .select_only()
            .column(entity::review::Column::Rating)
            .filter(entity::review::Column::PokemonId.eq(pokemon_id))
            .into_tuple()
            .all(self.db)
            .await?;

        if ratings.is_empty() {
            return Ok(0.0);
        }

        let total: f64 = ratings.iter().map(|rating| f64::from(*rating)).sum();

        Ok(total / ratings.len() as f64)
    }

    /// Creates a new Pokemon linked to the provided owner & category
    ///
    /// Any ID present on the active model is discarded in favor of the generated one.
    pub async fn create(
        &self,
        pokemon: entity::pokemon::ActiveModel,
        owner_id: i32,
        category_id: i32,
    ) -> Result<entity::pokemon::Model, DbErr> {
        let mut pokemon = pokemon;
        pokemon.id = ActiveValue::NotSet;

        let pokemon = pokemon.insert(self.db).await?;

        self.link_owner(pokemon.id, owner_id).await?;
        self.link_category(pokemon.id, category_id).await?;

        Ok(pokemon)
    }

    /// Replaces every mapped field of the Pokemon with the provided ID
    ///
    /// Returns `Ok(None)` if no Pokemon has that ID.
    pub async fn update(
        &self,
        pokemon_id: i32,
        pokemon: entity::pokemon::ActiveModel,
    ) -> Result<Option<entity::pokemon::Model>, DbErr> {
        if !self.exists(pokemon_id).await? {
            return Ok(None);
        }

        let mut pokemon = pokemon;
        pokemon.id = ActiveValue::Unchanged(pokemon_id);

        let pokemon = pokemon.update(self.db).await?;

        Ok(Some(pokemon))
    }

    /// Links a Pokemon to an owner, returns `false` if the link already existed
    pub async fn link_owner(&self, pokemon_id: i32, owner_id: i32) -> Result<bool, DbErr> {
        let existing = entity::prelude::PokemonOwner::find_by_id((pokemon_id, owner_id))
            .one(self.db)
            .await?;

        if existing.is_some() {
            return Ok(false);
        }

        let link = entity::pokemon_owner::ActiveModel {
            pokemon_id: ActiveValue::Set(pokemon_id),
            owner_id: ActiveValue::Set(owner_id),
        };

        let rows = entity::prelude::PokemonOwner::insert(link)
            .exec_without_returning(self.db)
            .await?;

        Ok(rows > 0)
    }

    /// Links a Pokemon to a category, returns `false` if the link already existed
    pub async fn link_category(&self, pokemon_id: i32, category_id: i32) -> Result<bool, DbErr> {
        let existing = entity::prelude::PokemonCategory::find_by_id((pokemon_id, category_id))
            .one(self.db)
            .await?;

        if existing.is_some() {
            return Ok(false);
        }

        let link = entity::pokemon_category::ActiveModel {
            pokemon_id: ActiveValue::Set(pokemon_id),
            category_id: ActiveValue::Set(category_id),
        };

        let rows = entity::prelude::PokemonCategory::insert(link)
            .exec_without_returning(self.db)
            .await?;

        Ok(rows > 0)
    }

    /// Deletes a Pokemon along with its owner & category links
    ///
    /// Reviews are not touched, delete them first. Returns OK regardless of the Pokemon
    /// existing, check [`DeleteResult::rows_affected`] to confirm the deletion.
    pub async fn delete(&self, pokemon_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::PokemonOwner::delete_many()
            .filter(entity::pokemon_owner::Column::PokemonId.eq(pokemon_id))
            .exec(self.db)
            .await?;

        entity::prelude::PokemonCategory::delete_many()
            .filter(entity::pokemon_category::Column::PokemonId.eq(pokemon_id))
            .exec(self.db)
            .await?;

        entity::prelude::Pokemon::delete_by_id(pokemon_id)
            .exec(self.db)
            .await
    }
}
