pub use sea_orm_migration::prelude::*;

mod m20251020_000001_create_country_table;
mod m20251020_000002_create_owner_table;
mod m20251020_000003_create_category_table;
mod m20251020_000004_create_pokemon_table;
mod m20251020_000005_create_pokemon_owner_table;
mod m20251020_000006_create_pokemon_category_table;
mod m20251020_000007_create_reviewer_table;
mod m20251020_000008_create_review_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251020_000001_create_country_table::Migration),
            Box::new(m20251020_000002_create_owner_table::Migration),
            Box::new(m20251020_000003_create_category_table::Migration),
            Box::new(m20251020_000004_create_pokemon_table::Migration),
            Box::new(m20251020_000005_create_pokemon_owner_table::Migration),
            Box::new(m20251020_000006_create_pokemon_category_table::Migration),
            Box::new(m20251020_000007_create_reviewer_table::Migration),
            Box::new(m20251020_000008_create_review_table::Migration),
        ]
    }
}
