use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ArchiveTeam::Table)
                    .if_not_exists()
                    .col(pk_uuid(ArchiveTeam::Id))
                    .col(string(ArchiveTeam::Place))
                    .col(string(ArchiveTeam::Name))
                    .col(string(ArchiveTeam::Teamname))
                    .col(timestamp_with_time_zone(ArchiveTeam::SeasonStart))
                    .col(timestamp_with_time_zone(ArchiveTeam::SeasonEnd))
                    .col(integer(ArchiveTeam::SeasonNumber))
                    .col(uuid(ArchiveTeam::ContinuationId))
                    .col(boolean(ArchiveTeam::RosterOpen))
                    .col(json(ArchiveTeam::Managers))
                    .col(json(ArchiveTeam::Players))
                    .col(json(ArchiveTeam::Requests))
                    .col(uuid_null(ArchiveTeam::Designation))
                    .col(boolean(ArchiveTeam::Verified))
                    .col(timestamp_with_time_zone(ArchiveTeam::CreatedAt))
                    .col(
                        timestamp_with_time_zone(ArchiveTeam::ArchivedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_archive_team_continuation_id")
                    .table(ArchiveTeam::Table)
                    .col(ArchiveTeam::ContinuationId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ArchiveTeam::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ArchiveTeam {
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
    ArchivedAt,
}
