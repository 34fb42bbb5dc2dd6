use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251020_000004_create_pokemon_table::Pokemon,
    m20251020_000007_create_reviewer_table::Reviewer,
};

static IDX_REVIEW_POKEMON_ID: &str = "idx_review_pokemon_id";
static IDX_REVIEW_REVIEWER_ID: &str = "idx_review_reviewer_id";
static FK_REVIEW_POKEMON_ID: &str = "fk_review_pokemon_id";
static FK_REVIEW_REVIEWER_ID: &str = "fk_review_reviewer_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Review::Table)
                    .if_not_exists()
                    .col(pk_auto(Review::Id))
                    .col(string(Review::Title))
                    .col(string_uniq(Review::NormalizedTitle))
                    .col(text(Review::Text))
                    .col(integer(Review::Rating))
                    .col(integer(Review::PokemonId))
                    .col(integer(Review::ReviewerId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_REVIEW_POKEMON_ID)
                            .from_tbl(Review::Table)
                            .from_col(Review::PokemonId)
                            .to_tbl(Pokemon::Table)
                            .to_col(Pokemon::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_REVIEW_REVIEWER_ID)
                            .from_tbl(Review::Table)
                            .from_col(Review::ReviewerId)
                            .to_tbl(Reviewer::Table)
                            .to_col(Reviewer::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_REVIEW_POKEMON_ID)
                    .table(Review::Table)
                    .col(Review::PokemonId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_REVIEW_REVIEWER_ID)
                    .table(Review::Table)
                    .col(Review::ReviewerId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_REVIEW_REVIEWER_ID)
                    .table(Review::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_REVIEW_POKEMON_ID)
                    .table(Review::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Review::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Review {
    Table,
    Id,
    Title,
    NormalizedTitle,
    Text,
    Rating,
    PokemonId,
    ReviewerId,
}
