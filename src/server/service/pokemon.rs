use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        category::CategoryRepository, owner::OwnerRepository, pokemon::PokemonRepository,
        review::ReviewRepository,
    },
    error::{
        resource::{Resource, ResourceError},
        Error,
    },
    model::db::PokemonModel,
    service::{ensure_updated, DELETE_FAILED, DELETE_REVIEWS_FAILED},
};

pub struct PokemonService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PokemonService<'a> {
    /// Creates a new instance of [`PokemonService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<PokemonModel>, Error> {
        Ok(PokemonRepository::new(self.db).get_all().await?)
    }

    /// Gets a Pokemon by ID
    ///
    /// # Returns
    /// - `Ok(PokemonModel)` - Pokemon found
    /// - `Err(ResourceError::NotFound)` - No Pokemon with that ID
    /// - `Err(Error::DbErr)` - Database query failed
    pub async fn get(&self, pokemon_id: i32) -> Result<PokemonModel, Error> {
        PokemonRepository::new(self.db)
            .get_by_id(pokemon_id)
            .await?
            .ok_or_else(|| ResourceError::not_found(Resource::Pokemon, pokemon_id).into())
    }

    /// Gets the mean review rating of a Pokemon, `0.0` when it has no reviews
    pub async fn get_rating(&self, pokemon_id: i32) -> Result<f64, Error> {
        let pokemon_repo = PokemonRepository::new(self.db);

        if !pokemon_repo.exists(pokemon_id).await? {
            return Err(ResourceError::not_found(Resource::Pokemon, pokemon_id).into());
        }

        Ok(pokemon_repo.get_rating(pokemon_id).await?)
    }

    pub async fn get_by_owner(&self, owner_id: i32) -> Result<Vec<PokemonModel>, Error> {
        if !OwnerRepository::new(self.db).exists(owner_id).await? {
            return Err(ResourceError::not_found(Resource::Owner, owner_id).into());
        }

        Ok(PokemonRepository::new(self.db).get_by_owner(owner_id).await?)
    }

    pub async fn get_by_category(&self, category_id: i32) -> Result<Vec<PokemonModel>, Error> {
        if !CategoryRepository::new(self.db).exists(category_id).await? {
            return Err(ResourceError::not_found(Resource::Category, category_id).into());
        }

        Ok(PokemonRepository::new(self.db)
            .get_by_category(category_id)
            .await?)
    }

    /// Creates a Pokemon owned by `owner_id` and filed under `category_id`
    ///
    /// The Pokemon and both join rows are written in one transaction.
    ///
    /// # Returns
    /// - `Ok(PokemonModel)` - The created Pokemon
    /// - `Err(ResourceError::NotFound)` - Owner or category does not exist
    /// - `Err(ResourceError::AlreadyExists)` - Another Pokemon has the same normalized name
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create(
        &self,
        pokemon: entity::pokemon::ActiveModel,
        owner_id: i32,
        category_id: i32,
    ) -> Result<PokemonModel, Error> {
        let txn = self.db.begin().await?;

        if !OwnerRepository::new(&txn).exists(owner_id).await? {
            return Err(ResourceError::not_found(Resource::Owner, owner_id).into());
        }

        if !CategoryRepository::new(&txn).exists(category_id).await? {
            return Err(ResourceError::not_found(Resource::Category, category_id).into());
        }

        let pokemon = PokemonRepository::new(&txn)
            .create(pokemon, owner_id, category_id)
            .await
            .map_err(|e| ResourceError::from_db_err(Resource::Pokemon, e))?;

        txn.commit().await?;

        tracing::debug!(pokemon_id = pokemon.id, "Created Pokemon");

        Ok(pokemon)
    }

    /// Replaces the fields of an existing Pokemon
    ///
    /// When `owner_id` or `category_id` is provided the Pokemon is additionally linked to
    /// it, existing links are kept.
    pub async fn update(
        &self,
        pokemon_id: i32,
        pokemon: entity::pokemon::ActiveModel,
        owner_id: Option<i32>,
        category_id: Option<i32>,
    ) -> Result<PokemonModel, Error> {
        let txn = self.db.begin().await?;
        let pokemon_repo = PokemonRepository::new(&txn);

        if !pokemon_repo.exists(pokemon_id).await? {
            return Err(ResourceError::not_found(Resource::Pokemon, pokemon_id).into());
        }

        if let Some(owner_id) = owner_id {
            if !OwnerRepository::new(&txn).exists(owner_id).await? {
                return Err(ResourceError::not_found(Resource::Owner, owner_id).into());
            }
        }

        if let Some(category_id) = category_id {
            if !CategoryRepository::new(&txn).exists(category_id).await? {
                return Err(ResourceError::not_found(Resource::Category, category_id).into());
            }
        }

        let updated = pokemon_repo
            .update(pokemon_id, pokemon)
            .await
            .map_err(|e| ResourceError::from_db_err(Resource::Pokemon, e))?;
        let updated = ensure_updated(updated)?;

        if let Some(owner_id) = owner_id {
            pokemon_repo.link_owner(pokemon_id, owner_id).await?;
        }

        if let Some(category_id) = category_id {
            pokemon_repo.link_category(pokemon_id, category_id).await?;
        }

        txn.commit().await?;

        Ok(updated)
    }

    /// Deletes a Pokemon, deleting its reviews first
    ///
    /// Failing to delete the reviews is logged and recorded but does not stop the Pokemon
    /// from being deleted. If deleting the Pokemon then fails as well, every recorded
    /// failure is returned in [`ResourceError::PersistFailed`].
    pub async fn delete(&self, pokemon_id: i32) -> Result<(), Error> {
        let pokemon_repo = PokemonRepository::new(self.db);
        let review_repo = ReviewRepository::new(self.db);

        if !pokemon_repo.exists(pokemon_id).await? {
            return Err(ResourceError::not_found(Resource::Pokemon, pokemon_id).into());
        }

        let review_ids: Vec<i32> = review_repo
            .get_by_pokemon(pokemon_id)
            .await?
            .into_iter()
            .map(|review| review.id)
            .collect();

        let mut errors = Vec::new();

        if !review_ids.is_empty() {
            let expected = review_ids.len() as u64;

            match review_repo.delete_many(review_ids).await {
                Ok(result) if result.rows_affected == expected => {}
                Ok(result) => {
                    tracing::warn!(
                        pokemon_id = pokemon_id,
                        expected = expected,
                        deleted = result.rows_affected,
                        "Deleted fewer reviews than found for Pokemon"
                    );

                    errors.push(DELETE_REVIEWS_FAILED.to_string());
                }
                Err(err) => {
                    tracing::warn!(
                        pokemon_id = pokemon_id,
                        "Failed to delete reviews of Pokemon: {}",
                        err
                    );

                    errors.push(DELETE_REVIEWS_FAILED.to_string());
                }
            }
        }

        match pokemon_repo.delete(pokemon_id).await {
            Ok(result) if result.rows_affected > 0 => Ok(()),
            Ok(_) => {
                errors.push(DELETE_FAILED.to_string());

                Err(ResourceError::PersistFailed(errors).into())
            }
            Err(err) => {
                tracing::error!(pokemon_id = pokemon_id, "Failed to delete Pokemon: {}", err);
                errors.push(DELETE_FAILED.to_string());

                Err(ResourceError::PersistFailed(errors).into())
            }
        }
    }
}
