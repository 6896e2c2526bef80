use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(VerificationRequest::Table)
                    .if_not_exists()
                    .col(pk_uuid(VerificationRequest::Id))
                    .col(uuid(VerificationRequest::TeamId))
                    .col(uuid(VerificationRequest::RequesterId))
                    .col(string_len(VerificationRequest::Status, 16))
                    .col(
                        timestamp_with_time_zone(VerificationRequest::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(VerificationRequest::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum VerificationRequest {
    Table,
    Id,
    TeamId,
    RequesterId,
    Status,
    CreatedAt,
}
