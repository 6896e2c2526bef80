//! Team factory for creating live team entities.

use crate::factory::helpers::{current_year, end_of_year, next_id, start_of_year};
use chrono::{DateTime, Utc};
use entity::embedded::{IdList, UserSnapshot, UserSnapshots};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test teams.
///
/// The team is inserted as the first season of its own lineage
/// (`continuation_id == id`) unless `continuation_id` is overridden. Only the team
/// document is written; use the helpers in `factory::helpers` to keep the user side
/// of a membership in sync.
pub struct TeamFactory<'a> {
    db: &'a DatabaseConnection,
    place: String,
    name: String,
    teamname: String,
    season_start: DateTime<Utc>,
    season_end: DateTime<Utc>,
    season_number: i32,
    continuation_id: Option<Uuid>,
    roster_open: bool,
    managers: Vec<UserSnapshot>,
    players: Vec<UserSnapshot>,
    requests: Vec<Uuid>,
}

impl<'a> TeamFactory<'a> {
    /// Creates a new TeamFactory with default values.
    ///
    /// Defaults:
    /// - place `"Place{n}"`, name `"Team{n}"`, teamname `"team{n}"`
    /// - season spanning the current calendar year, season number 1
    /// - roster open, no members, no requests
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let year = current_year();
        Self {
            db,
            place: format!("Place{}", id),
            name: format!("Team{}", id),
            teamname: format!("team{}", id),
            season_start: start_of_year(year),
            season_end: end_of_year(year),
            season_number: 1,
            continuation_id: None,
            roster_open: true,
            managers: Vec::new(),
            players: Vec::new(),
            requests: Vec::new(),
        }
    }

    pub fn place(mut self, place: impl Into<String>) -> Self {
        self.place = place.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn teamname(mut self, teamname: impl Into<String>) -> Self {
        self.teamname = teamname.into();
        self
    }

    pub fn season(mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        self.season_start = start;
        self.season_end = end;
        self
    }

    pub fn season_number(mut self, season_number: i32) -> Self {
        self.season_number = season_number;
        self
    }

    pub fn continuation_id(mut self, continuation_id: Uuid) -> Self {
        self.continuation_id = Some(continuation_id);
        self
    }

    pub fn roster_open(mut self, open: bool) -> Self {
        self.roster_open = open;
        self
    }

    pub fn manager(mut self, manager: UserSnapshot) -> Self {
        self.managers.push(manager);
        self
    }

    pub fn player(mut self, player: UserSnapshot) -> Self {
        self.players.push(player);
        self
    }

    pub fn request(mut self, request_id: Uuid) -> Self {
        self.requests.push(request_id);
        self
    }

    /// Builds and inserts the team entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::team::Model)` - Created team entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::team::Model, DbErr> {
        let id = Uuid::new_v4();
        entity::team::ActiveModel {
            id: ActiveValue::Set(id),
            place: ActiveValue::Set(self.place),
            name: ActiveValue::Set(self.name),
            teamname: ActiveValue::Set(self.teamname),
            season_start: ActiveValue::Set(self.season_start),
            season_end: ActiveValue::Set(self.season_end),
            season_number: ActiveValue::Set(self.season_number),
            continuation_id: ActiveValue::Set(self.continuation_id.unwrap_or(id)),
            roster_open: ActiveValue::Set(self.roster_open),
            managers: ActiveValue::Set(UserSnapshots(self.managers)),
            players: ActiveValue::Set(UserSnapshots(self.players)),
            requests: ActiveValue::Set(IdList(self.requests)),
            designation: ActiveValue::Set(None),
            verified: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a team with default values and no members.
pub async fn create_team(db: &DatabaseConnection) -> Result<entity::team::Model, DbErr> {
    TeamFactory::new(db).build().await
}
