use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, EntityTrait};

use crate::{
    fixtures::{normalize, owner::OwnerFixtures},
    TestError,
};

pub struct PokemonFixtures<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PokemonFixtures<'a> {
    pub(crate) fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Insert a Pokemon born 2000-01-01 with 100 base experience
    pub async fn insert_mock_pokemon(
        &self,
        name: &str,
    ) -> Result<entity::pokemon::Model, TestError> {
        let pokemon = entity::pokemon::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            normalized_name: ActiveValue::Set(normalize(name)),
            birth_date: ActiveValue::Set(NaiveDate::from_ymd_opt(2000, 1, 1).unwrap_or_default()),
            base_experience: ActiveValue::Set(100),
            ..Default::default()
        };

        Ok(pokemon.insert(self.db).await?)
    }

    pub async fn insert_mock_category(
        &self,
        name: &str,
    ) -> Result<entity::category::Model, TestError> {
        let category = entity::category::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            normalized_name: ActiveValue::Set(normalize(name)),
            ..Default::default()
        };

        Ok(category.insert(self.db).await?)
    }

    pub async fn link_owner(&self, pokemon_id: i32, owner_id: i32) -> Result<(), TestError> {
        let link = entity::pokemon_owner::ActiveModel {
            pokemon_id: ActiveValue::Set(pokemon_id),
            owner_id: ActiveValue::Set(owner_id),
        };

        entity::prelude::PokemonOwner::insert(link)
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }

    pub async fn link_category(&self, pokemon_id: i32, category_id: i32) -> Result<(), TestError> {
        let link = entity::pokemon_category::ActiveModel {
            pokemon_id: ActiveValue::Set(pokemon_id),
            category_id: ActiveValue::Set(category_id),
        };

        entity::prelude::PokemonCategory::insert(link)
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }

    /// Insert a Pokemon linked to a new owner (with country) and a new category
    ///
    /// # Returns
    /// - `(pokemon, owner, category)` - The inserted records
    pub async fn insert_owned_pokemon(
        &self,
        name: &str,
    ) -> Result<
        (
            entity::pokemon::Model,
            entity::owner::Model,
            entity::category::Model,
        ),
        TestError,
    > {
        let (owner, _) = OwnerFixtures::new(self.db)
            .insert_owner_with_mock_country(&format!("Owner of {}", name))
            .await?;
        let category = self
            .insert_mock_category(&format!("Category of {}", name))
            .await?;
        let pokemon = self.insert_mock_pokemon(name).await?;

        self.link_owner(pokemon.id, owner.id).await?;
        self.link_category(pokemon.id, category.id).await?;

        Ok((pokemon, owner, category))
    }
}
