use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RosterRequest::Table)
                    .if_not_exists()
                    .col(pk_uuid(RosterRequest::Id))
                    .col(uuid(RosterRequest::TeamId))
                    .col(uuid(RosterRequest::UserId))
                    .col(string_len(RosterRequest::RequestSource, 16))
                    .col(string_len(RosterRequest::Status, 16))
                    .col(
                        timestamp_with_time_zone(RosterRequest::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_roster_request_user_team")
                    .table(RosterRequest::Table)
                    .col(RosterRequest::UserId)
                    .col(RosterRequest::TeamId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RosterRequest::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum RosterRequest {
    Table,
    Id,
    TeamId,
    UserId,
    RequestSource,
    Status,
    CreatedAt,
}
