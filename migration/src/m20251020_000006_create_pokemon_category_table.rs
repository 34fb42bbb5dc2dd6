use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251020_000003_create_category_table::Category,
    m20251020_000004_create_pokemon_table::Pokemon,
};

static IDX_POKEMON_CATEGORY_CATEGORY_ID: &str = "idx_pokemon_category_category_id";
static FK_POKEMON_CATEGORY_POKEMON_ID: &str = "fk_pokemon_category_pokemon_id";
static FK_POKEMON_CATEGORY_CATEGORY_ID: &str = "fk_pokemon_category_category_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PokemonCategory::Table)
                    .if_not_exists()
                    .col(integer(PokemonCategory::PokemonId))
                    .col(integer(PokemonCategory::CategoryId))
                    .primary_key(
                        Index::create()
                            .col(PokemonCategory::PokemonId)
                            .col(PokemonCategory::CategoryId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_POKEMON_CATEGORY_POKEMON_ID)
                            .from_tbl(PokemonCategory::Table)
                            .from_col(PokemonCategory::PokemonId)
                            .to_tbl(Pokemon::Table)
                            .to_col(Pokemon::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_POKEMON_CATEGORY_CATEGORY_ID)
                            .from_tbl(PokemonCategory::Table)
                            .from_col(PokemonCategory::CategoryId)
                            .to_tbl(Category::Table)
                            .to_col(Category::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_POKEMON_CATEGORY_CATEGORY_ID)
                    .table(PokemonCategory::Table)
                    .col(PokemonCategory::CategoryId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_POKEMON_CATEGORY_CATEGORY_ID)
                    .table(PokemonCategory::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(PokemonCategory::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum PokemonCategory {
    Table,
    PokemonId,
    CategoryId,
}
