use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{country::CountryRepository, owner::OwnerRepository, pokemon::PokemonRepository},
    error::{
        resource::{Resource, ResourceError},
        Error,
    },
    model::db::OwnerModel,
    service::{ensure_deleted, ensure_updated},
};

pub struct OwnerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OwnerService<'a> {
    /// Creates a new instance of [`OwnerService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<OwnerModel>, Error> {
        Ok(OwnerRepository::new(self.db).get_all().await?)
    }

    pub async fn get(&self, owner_id: i32) -> Result<OwnerModel, Error> {
        OwnerRepository::new(self.db)
            .get_by_id(owner_id)
            .await?
            .ok_or_else(|| ResourceError::not_found(Resource::Owner, owner_id).into())
    }

    /// Gets every owner of a Pokemon
    pub async fn get_by_pokemon(&self, pokemon_id: i32) -> Result<Vec<OwnerModel>, Error> {
        if !PokemonRepository::new(self.db).exists(pokemon_id).await? {
            return Err(ResourceError::not_found(Resource::Pokemon, pokemon_id).into());
        }

        Ok(OwnerRepository::new(self.db)
            .get_by_pokemon(pokemon_id)
            .await?)
    }

    /// Creates an owner living in `country_id`
    ///
    /// # Returns
    /// - `Ok(OwnerModel)` - The created owner
    /// - `Err(ResourceError::NotFound)` - Country does not exist
    /// - `Err(ResourceError::AlreadyExists)` - Another owner has the same normalized name
    pub async fn create(
        &self,
        owner: entity::owner::ActiveModel,
        country_id: i32,
    ) -> Result<OwnerModel, Error> {
        if !CountryRepository::new(self.db).exists(country_id).await? {
            return Err(ResourceError::not_found(Resource::Country, country_id).into());
        }

        OwnerRepository::new(self.db)
            .create(owner, country_id)
            .await
            .map_err(|e| ResourceError::from_db_err(Resource::Owner, e))
    }

    /// Replaces the fields of an existing owner, moving them when `country_id` is provided
    pub async fn update(
        &self,
        owner_id: i32,
        owner: entity::owner::ActiveModel,
        country_id: Option<i32>,
    ) -> Result<OwnerModel, Error> {
        let owner_repo = OwnerRepository::new(self.db);

        if !owner_repo.exists(owner_id).await? {
            return Err(ResourceError::not_found(Resource::Owner, owner_id).into());
        }

        if let Some(country_id) = country_id {
            if !CountryRepository::new(self.db).exists(country_id).await? {
                return Err(ResourceError::not_found(Resource::Country, country_id).into());
            }
        }

        let updated = owner_repo
            .update(owner_id, owner, country_id)
            .await
            .map_err(|e| ResourceError::from_db_err(Resource::Owner, e))?;

        Ok(ensure_updated(updated)?)
    }

    /// Deletes an owner, unlinking them from their Pokemon
    ///
    /// The links and the owner are removed in one transaction.
    pub async fn delete(&self, owner_id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;
        let owner_repo = OwnerRepository::new(&txn);

        if !owner_repo.exists(owner_id).await? {
            return Err(ResourceError::not_found(Resource::Owner, owner_id).into());
        }

        ensure_deleted(owner_repo.delete(owner_id).await?)?;

        txn.commit().await?;

        Ok(())
    }
}
