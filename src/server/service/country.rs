use sea_orm::DatabaseConnection;

use crate::server::{
    data::{country::CountryRepository, owner::OwnerRepository},
    error::{
        resource::{Resource, ResourceError},
        Error,
    },
    model::db::{CountryModel, OwnerModel},
    service::{ensure_deleted, ensure_updated},
};

pub struct CountryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CountryService<'a> {
    /// Creates a new instance of [`CountryService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<CountryModel>, Error> {
        Ok(CountryRepository::new(self.db).get_all().await?)
    }

    pub async fn get(&self, country_id: i32) -> Result<CountryModel, Error> {
        CountryRepository::new(self.db)
            .get_by_id(country_id)
            .await?
            .ok_or_else(|| ResourceError::not_found(Resource::Country, country_id).into())
    }

    /// Gets the country an owner lives in
    pub async fn get_by_owner(&self, owner_id: i32) -> Result<CountryModel, Error> {
        CountryRepository::new(self.db)
            .get_by_owner(owner_id)
            .await?
            .ok_or_else(|| ResourceError::not_found(Resource::Owner, owner_id).into())
    }

    /// Gets every owner living in a country
    pub async fn get_owners(&self, country_id: i32) -> Result<Vec<OwnerModel>, Error> {
        if !CountryRepository::new(self.db).exists(country_id).await? {
            return Err(ResourceError::not_found(Resource::Country, country_id).into());
        }

        Ok(OwnerRepository::new(self.db)
            .get_by_country(country_id)
            .await?)
    }

    pub async fn create(&self, country: entity::country::ActiveModel) -> Result<CountryModel, Error> {
        CountryRepository::new(self.db)
            .create(country)
            .await
            .map_err(|e| ResourceError::from_db_err(Resource::Country, e))
    }

    pub async fn update(
        &self,
        country_id: i32,
        country: entity::country::ActiveModel,
    ) -> Result<CountryModel, Error> {
        let country_repo = CountryRepository::new(self.db);

        if !country_repo.exists(country_id).await? {
            return Err(ResourceError::not_found(Resource::Country, country_id).into());
        }

        let updated = country_repo
            .update(country_id, country)
            .await
            .map_err(|e| ResourceError::from_db_err(Resource::Country, e))?;

        Ok(ensure_updated(updated)?)
    }

    /// Deletes a country
    ///
    /// # Returns
    /// - `Ok(())` - Country deleted
    /// - `Err(ResourceError::NotFound)` - No country with that ID
    /// - `Err(ResourceError::StillReferenced)` - Owners still live in the country
    pub async fn delete(&self, country_id: i32) -> Result<(), Error> {
        let country_repo = CountryRepository::new(self.db);

        if !country_repo.exists(country_id).await? {
            return Err(ResourceError::not_found(Resource::Country, country_id).into());
        }

        let owners = OwnerRepository::new(self.db)
            .get_by_country(country_id)
            .await?;

        if !owners.is_empty() {
            return Err(ResourceError::StillReferenced {
                resource: Resource::Country,
                id: country_id,
                dependent: Resource::Owner,
            }
            .into());
        }

        Ok(ensure_deleted(country_repo.delete(country_id).await?)?)
    }
}
