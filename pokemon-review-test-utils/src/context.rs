//! Test context returned by `TestBuilder`.

use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::{
    error::TestError,
    fixtures::{owner::OwnerFixtures, pokemon::PokemonFixtures, review::ReviewFixtures},
};

/// Test environment holding an in-memory SQLite database.
///
/// ```ignore
/// let test = TestBuilder::new().with_all_tables().build().await?;
///
/// let pokemon = test.pokemon().insert_mock_pokemon("Pikachu").await?;
/// let state: AppState = test.to_app_state();
/// ```
pub struct TestContext {
    /// Database connection to in-memory SQLite database
    pub db: DatabaseConnection,
}

impl TestContext {
    /// Convert the database connection into any type that can be constructed from it.
    ///
    /// Lets tests build the server's `AppState` without this crate depending on the server.
    pub fn to_app_state<T>(&self) -> T
    where
        T: From<DatabaseConnection>,
    {
        T::from(self.db.clone())
    }

    /// Fixtures for Pokemon, categories and their join rows
    pub fn pokemon(&self) -> PokemonFixtures<'_> {
        PokemonFixtures::new(&self.db)
    }

    /// Fixtures for countries and owners
    pub fn owner(&self) -> OwnerFixtures<'_> {
        OwnerFixtures::new(&self.db)
    }

    /// Fixtures for reviewers and reviews
    pub fn review(&self) -> ReviewFixtures<'_> {
        ReviewFixtures::new(&self.db)
    }
}

impl TestContext {
    pub(crate) async fn new() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        Ok(Self { db })
    }

    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }
}
