use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Team::Table)
                    .if_not_exists()
                    .col(pk_uuid(Team::Id))
                    .col(string(Team::Place))
                    .col(string(Team::Name))
                    .col(string_uniq(Team::Teamname))
                    .col(timestamp_with_time_zone(Team::SeasonStart))
                    .col(timestamp_with_time_zone(Team::SeasonEnd))
                    .col(integer(Team::SeasonNumber).default(1))
                    .col(uuid(Team::ContinuationId))
                    .col(boolean(Team::RosterOpen).default(false))
                    .col(json(Team::Managers))
                    .col(json(Team::Players))
                    .col(json(Team::Requests))
                    .col(uuid_null(Team::Designation))
                    .col(boolean(Team::Verified).default(false))
                    .col(
                        timestamp_with_time_zone(Team::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_team_continuation_id")
                    .table(Team::Table)
                    .col(Team::ContinuationId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Team::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Team {
    Table,
    Id,
    Place,
    Name,
    Teamname,
    SeasonStart,
    SeasonEnd,
    SeasonNumber,
    ContinuationId,
    RosterOpen,
    Managers,
    Players,
    Requests,
    Designation,
    Verified,
    CreatedAt,
}
