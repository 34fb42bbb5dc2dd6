use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};

use crate::{fixtures::normalize, TestError};

pub struct OwnerFixtures<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OwnerFixtures<'a> {
    pub(crate) fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Insert a country with the given name
    pub async fn insert_mock_country(
        &self,
        name: &str,
    ) -> Result<entity::country::Model, TestError> {
        let country = entity::country::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            normalized_name: ActiveValue::Set(normalize(name)),
            ..Default::default()
        };

        Ok(country.insert(self.db).await?)
    }

    /// Insert an owner living in the given country
    pub async fn insert_mock_owner(
        &self,
        name: &str,
        country_id: i32,
    ) -> Result<entity::owner::Model, TestError> {
        let owner = entity::owner::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            normalized_name: ActiveValue::Set(normalize(name)),
            gym: ActiveValue::Set("Pewter Gym".to_string()),
            country_id: ActiveValue::Set(country_id),
            ..Default::default()
        };

        Ok(owner.insert(self.db).await?)
    }

    /// Insert an owner together with a freshly created country
    pub async fn insert_owner_with_mock_country(
        &self,
        name: &str,
    ) -> Result<(entity::owner::Model, entity::country::Model), TestError> {
        let country = self
            .insert_mock_country(&format!("Country of {}", name))
            .await?;
        let owner = self.insert_mock_owner(name, country.id).await?;

        Ok((owner, country))
    }
}
