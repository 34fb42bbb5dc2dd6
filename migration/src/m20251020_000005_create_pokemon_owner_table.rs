use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251020_000002_create_owner_table::Owner, m20251020_000004_create_pokemon_table::Pokemon,
};

static IDX_POKEMON_OWNER_OWNER_ID: &str = "idx_pokemon_owner_owner_id";
static FK_POKEMON_OWNER_POKEMON_ID: &str = "fk_pokemon_owner_pokemon_id";
static FK_POKEMON_OWNER_OWNER_ID: &str = "fk_pokemon_owner_owner_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PokemonOwner::Table)
                    .if_not_exists()
                    .col(integer(PokemonOwner::PokemonId))
                    .col(integer(PokemonOwner::OwnerId))
                    .primary_key(
                        Index::create()
                            .col(PokemonOwner::PokemonId)
                            .col(PokemonOwner::OwnerId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_POKEMON_OWNER_POKEMON_ID)
                            .from_tbl(PokemonOwner::Table)
                            .from_col(PokemonOwner::PokemonId)
                            .to_tbl(Pokemon::Table)
                            .to_col(Pokemon::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_POKEMON_OWNER_OWNER_ID)
                            .from_tbl(PokemonOwner::Table)
                            .from_col(PokemonOwner::OwnerId)
                            .to_tbl(Owner::Table)
                            .to_col(Owner::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_POKEMON_OWNER_OWNER_ID)
                    .table(PokemonOwner::Table)
                    .col(PokemonOwner::OwnerId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_POKEMON_OWNER_OWNER_ID)
                    .table(PokemonOwner::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(PokemonOwner::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum PokemonOwner {
    Table,
    PokemonId,
    OwnerId,
}
