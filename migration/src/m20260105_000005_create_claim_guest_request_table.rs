use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ClaimGuestRequest::Table)
                    .if_not_exists()
                    .col(pk_uuid(ClaimGuestRequest::Id))
                    .col(uuid(ClaimGuestRequest::GuestId))
                    .col(uuid(ClaimGuestRequest::UserId))
                    .col(uuid(ClaimGuestRequest::TeamId))
                    .col(string_len(ClaimGuestRequest::Status, 16))
                    .col(
                        timestamp_with_time_zone(ClaimGuestRequest::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ClaimGuestRequest::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ClaimGuestRequest {
    Table,
    Id,
    GuestId,
    UserId,
    TeamId,
    Status,
    CreatedAt,
}
