use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reviewer::Table)
                    .if_not_exists()
                    .col(pk_auto(Reviewer::Id))
                    .col(string(Reviewer::FirstName))
                    .col(string(Reviewer::LastName))
                    .col(string_uniq(Reviewer::NormalizedName))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reviewer::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Reviewer {
    Table,
    Id,
    FirstName,
    LastName,
    NormalizedName,
}
