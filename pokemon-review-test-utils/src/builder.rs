//! Declarative test builder.
//!
//! Table creation is queued on the builder and executed in `build()`.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_all_tables: bool,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_all_tables: false,
        }
    }

    /// Add every table of the domain to the test database.
    ///
    /// Creates Country, Owner, Category, Pokemon, the PokemonOwner and PokemonCategory join
    /// tables, Reviewer and Review.
    pub fn with_all_tables(mut self) -> Self {
        self.include_all_tables = true;
        self
    }

    /// Add a single entity table to the test database.
    ///
    /// Chain multiple calls to add multiple tables. Useful for tests that need a schema
    /// with tables deliberately missing.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use entity::prelude::*;
    /// use pokemon_review_test_utils::TestBuilder;
    ///
    /// # async fn example() -> Result<(), pokemon_review_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Country)
    ///     .with_table(Owner)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Build the test context, creating all queued tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Database connected and tables created
    /// - `Err(TestError::DbErr)` - Connecting or creating a table failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let context = TestContext::new().await?;

        let mut tables = Vec::new();
        if self.include_all_tables {
            tables.extend(all_tables());
        }
        tables.extend(self.tables);

        context.with_tables(tables).await?;

        Ok(context)
    }
}

fn all_tables() -> Vec<TableCreateStatement> {
    use entity::prelude::*;

    let schema = Schema::new(sea_orm::DbBackend::Sqlite);

    vec![
        schema.create_table_from_entity(Country),
        schema.create_table_from_entity(Owner),
        schema.create_table_from_entity(Category),
        schema.create_table_from_entity(Pokemon),
        schema.create_table_from_entity(PokemonOwner),
        schema.create_table_from_entity(PokemonCategory),
        schema.create_table_from_entity(Reviewer),
        schema.create_table_from_entity(Review),
    ]
}
