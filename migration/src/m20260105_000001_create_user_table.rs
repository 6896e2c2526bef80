use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(pk_uuid(User::Id))
                    .col(string_uniq(User::Email))
                    .col(string_uniq(User::Username))
                    .col(string(User::Password))
                    .col(string(User::FirstName))
                    .col(string(User::LastName))
                    .col(boolean(User::Private).default(false))
                    .col(boolean(User::OpenToRequests).default(true))
                    .col(boolean(User::Guest).default(false))
                    .col(json(User::PlayerTeams))
                    .col(json(User::ManagerTeams))
                    .col(json(User::ArchiveTeams))
                    .col(json(User::Requests))
                    .col(json(User::Stats))
                    .col(
                        timestamp_with_time_zone(User::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum User {
    Table,
    Id,
    Email,
    Username,
    Password,
    FirstName,
    LastName,
    Private,
    OpenToRequests,
    Guest,
    PlayerTeams,
    ManagerTeams,
    ArchiveTeams,
    Requests,
    Stats,
    CreatedAt,
}
