use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OneTimePasscode::Table)
                    .if_not_exists()
                    .col(pk_uuid(OneTimePasscode::Id))
                    .col(string_len_uniq(OneTimePasscode::Code, 6))
                    .col(uuid(OneTimePasscode::CreatorId))
                    .col(string_len(OneTimePasscode::Reason, 32))
                    .col(uuid_null(OneTimePasscode::TeamId))
                    .col(timestamp_with_time_zone(OneTimePasscode::ExpiresAt))
                    .col(
                        timestamp_with_time_zone(OneTimePasscode::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OneTimePasscode::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum OneTimePasscode {
    Table,
    Id,
    Code,
    CreatorId,
    Reason,
    TeamId,
    ExpiresAt,
    CreatedAt,
}
