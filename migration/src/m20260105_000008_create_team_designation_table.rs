use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TeamDesignation::Table)
                    .if_not_exists()
                    .col(pk_uuid(TeamDesignation::Id))
                    .col(string_uniq(TeamDesignation::Name))
                    .col(text(TeamDesignation::Description))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TeamDesignation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TeamDesignation {
    Table,
    Id,
    Name,
    Description,
}
