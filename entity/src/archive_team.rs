use sea_orm::entity::prelude::*;

use crate::embedded::{IdList, UserSnapshots};

/// Frozen copy of a team season, keyed by the id the team had while live.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "archive_team")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub place: String,
    pub name: String,
    pub teamname: String,
    pub season_start: ChronoDateTimeUtc,
    pub season_end: ChronoDateTimeUtc,
    pub season_number: i32,
    pub continuation_id: Uuid,
    pub roster_open: bool,
    pub managers: UserSnapshots,
    pub players: UserSnapshots,
    pub requests: IdList,
    pub designation: Option<Uuid>,
    pub verified: bool,
    pub created_at: ChronoDateTimeUtc,
    pub archived_at: ChronoDateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
