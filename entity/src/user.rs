use sea_orm::entity::prelude::*;

use crate::embedded::{IdList, TeamSnapshots};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub email: String,
    #[sea_orm(unique)]
    pub username: String,
    /// Argon2 PHC string.
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub private: bool,
    pub open_to_requests: bool,
    pub guest: bool,
    pub player_teams: TeamSnapshots,
    pub manager_teams: TeamSnapshots,
    pub archive_teams: TeamSnapshots,
    /// Pending roster request ids involving this user.
    pub requests: IdList,
    pub stats: IdList,
    pub created_at: ChronoDateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
