use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Pokemon::Table)
                    .if_not_exists()
                    .col(pk_auto(Pokemon::Id))
                    .col(string(Pokemon::Name))
                    .col(string_uniq(Pokemon::NormalizedName))
                    .col(date(Pokemon::BirthDate))
                    .col(integer(Pokemon::BaseExperience))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Pokemon::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Pokemon {
    Table,
    Id,
    Name,
    NormalizedName,
    BirthDate,
    BaseExperience,
}
