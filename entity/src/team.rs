use sea_orm::entity::prelude::*;

use crate::embedded::{IdList, UserSnapshots};

/// A single live season of a team lineage.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "team")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub place: String,
    pub name: String,
    /// Immutable handle, unique among live teams.
    #[sea_orm(unique)]
    pub teamname: String,
    pub season_start: ChronoDateTimeUtc,
    pub season_end: ChronoDateTimeUtc,
    pub season_number: i32,
    /// Id of the first season of this lineage.
    pub continuation_id: Uuid,
    pub roster_open: bool,
    pub managers: UserSnapshots,
    pub players: UserSnapshots,
    pub requests: IdList,
    pub designation: Option<Uuid>,
    pub verified: bool,
    pub created_at: ChronoDateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
