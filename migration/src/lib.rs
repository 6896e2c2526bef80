pub use sea_orm_migration::prelude::*;

mod m20260105_000001_create_user_table;
mod m20260105_000002_create_team_table;
mod m20260105_000003_create_archive_team_table;
mod m20260105_000004_create_roster_request_table;
mod m20260105_000005_create_claim_guest_request_table;
mod m20260105_000006_create_one_time_passcode_table;
mod m20260105_000007_create_verification_request_table;
mod m20260105_000008_create_team_designation_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_user_table::Migration),
            Box::new(m20260105_000002_create_team_table::Migration),
            Box::new(m20260105_000003_create_archive_team_table::Migration),
            Box::new(m20260105_000004_create_roster_request_table::Migration),
            Box::new(m20260105_000005_create_claim_guest_request_table::Migration),
            Box::new(m20260105_000006_create_one_time_passcode_table::Migration),
            Box::new(m20260105_000007_create_verification_request_table::Migration),
            Box::new(m20260105_000008_create_team_designation_table::Migration),
        ]
    }
}
