//! Team and archived team domain models.
//!
//! A `Team` is one live season of a lineage; `continuation_id` links every season,
//! live or archived. An `ArchiveTeam` is the frozen copy written when a season stops
//! being live and keeps the id the team had at that moment.

use chrono::{DateTime, Utc};
use entity::embedded::{IdList, TeamSnapshot, UserSnapshots};
use sea_orm::ActiveValue;
use uuid::Uuid;
use validator::Validate;

use crate::model::team::{
    AddGuestDto, ArchiveTeamDto, CreateTeamDto, RolloverDto, TeamDto, TeamSummaryDto,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Team {
    pub id: Uuid,
    pub place: String,
    pub name: String,
    pub teamname: String,
    pub season_start: DateTime<Utc>,
    pub season_end: DateTime<Utc>,
    pub season_number: i32,
    pub continuation_id: Uuid,
    pub roster_open: bool,
    pub managers: UserSnapshots,
    pub players: UserSnapshots,
    pub requests: IdList,
    pub designation: Option<Uuid>,
    pub verified: bool,
    pub created_at: DateTime<Utc>,
}

impl Team {
    /// Converts an entity model to a team domain model at the repository boundary.
    pub fn from_entity(entity: entity::team::Model) -> Self {
        Self {
            id: entity.id,
            place: entity.place,
            name: entity.name,
            teamname: entity.teamname,
            season_start: entity.season_start,
            season_end: entity.season_end,
            season_number: entity.season_number,
            continuation_id: entity.continuation_id,
            roster_open: entity.roster_open,
            managers: entity.managers,
            players: entity.players,
            requests: entity.requests,
            designation: entity.designation,
            verified: entity.verified,
            created_at: entity.created_at,
        }
    }

    pub fn into_active_model(self) -> entity::team::ActiveModel {
        entity::team::ActiveModel {
            id: ActiveValue::Set(self.id),
            place: ActiveValue::Set(self.place),
            name: ActiveValue::Set(self.name),
            teamname: ActiveValue::Set(self.teamname),
            season_start: ActiveValue::Set(self.season_start),
            season_end: ActiveValue::Set(self.season_end),
            season_number: ActiveValue::Set(self.season_number),
            continuation_id: ActiveValue::Set(self.continuation_id),
            roster_open: ActiveValue::Set(self.roster_open),
            managers: ActiveValue::Set(self.managers),
            players: ActiveValue::Set(self.players),
            requests: ActiveValue::Set(self.requests),
            designation: ActiveValue::Set(self.designation),
            verified: ActiveValue::Set(self.verified),
            created_at: ActiveValue::Set(self.created_at),
        }
    }

    /// The partial copy embedded in a user's `player_teams` / `manager_teams`.
    pub fn snapshot(&self) -> TeamSnapshot {
        TeamSnapshot {
            id: self.id,
            place: self.place.clone(),
            name: self.name.clone(),
            teamname: self.teamname.clone(),
            season_start: self.season_start,
            season_end: self.season_end,
            season_number: self.season_number,
            verified: self.verified,
            designation: self.designation,
        }
    }

    /// `"{place} {name}"`, used for search ranking.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.place, self.name)
    }

    /// Freezes the team as it is now into an archive record keyed by its current id.
    pub fn to_archive(&self, archived_at: DateTime<Utc>) -> ArchiveTeam {
        ArchiveTeam {
            id: self.id,
            place: self.place.clone(),
            name: self.name.clone(),
            teamname: self.teamname.clone(),
            season_start: self.season_start,
            season_end: self.season_end,
            season_number: self.season_number,
            continuation_id: self.continuation_id,
            roster_open: self.roster_open,
            managers: self.managers.clone(),
            players: self.players.clone(),
            requests: self.requests.clone(),
            designation: self.designation,
            verified: self.verified,
            created_at: self.created_at,
            archived_at,
        }
    }

    /// Converts the team to a DTO.
    ///
    /// # Arguments
    /// - `public` - Strip the pending request queue for callers who are not managers
    pub fn into_dto(self, public: bool) -> TeamDto {
        TeamDto {
            id: self.id,
            place: self.place,
            name: self.name,
            teamname: self.teamname,
            season_start: self.season_start,
            season_end: self.season_end,
            season_number: self.season_number,
            continuation_id: self.continuation_id,
            roster_open: self.roster_open,
            managers: self.managers.0,
            players: self.players.0,
            requests: (!public).then_some(self.requests.0),
            designation: self.designation,
            verified: self.verified,
        }
    }

    pub fn summary_dto(&self) -> TeamSummaryDto {
        TeamSummaryDto {
            id: self.id,
            place: self.place.clone(),
            name: self.name.clone(),
            teamname: self.teamname.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArchiveTeam {
    pub id: Uuid,
    pub place: String,
    pub name: String,
    pub teamname: String,
    pub season_start: DateTime<Utc>,
    pub season_end: DateTime<Utc>,
    pub season_number: i32,
    pub continuation_id: Uuid,
    pub roster_open: bool,
    pub managers: UserSnapshots,
    pub players: UserSnapshots,
    pub requests: IdList,
    pub designation: Option<Uuid>,
    pub verified: bool,
    pub created_at: DateTime<Utc>,
    pub archived_at: DateTime<Utc>,
}

impl ArchiveTeam {
    pub fn from_entity(entity: entity::archive_team::Model) -> Self {
        Self {
            id: entity.id,
            place: entity.place,
            name: entity.name,
            teamname: entity.teamname,
            season_start: entity.season_start,
            season_end: entity.season_end,
            season_number: entity.season_number,
            continuation_id: entity.continuation_id,
            roster_open: entity.roster_open,
            managers: entity.managers,
            players: entity.players,
            requests: entity.requests,
            designation: entity.designation,
            verified: entity.verified,
            created_at: entity.created_at,
            archived_at: entity.archived_at,
        }
    }

    pub fn into_active_model(self) -> entity::archive_team::ActiveModel {
        entity::archive_team::ActiveModel {
            id: ActiveValue::Set(self.id),
            place: ActiveValue::Set(self.place),
            name: ActiveValue::Set(self.name),
            teamname: ActiveValue::Set(self.teamname),
            season_start: ActiveValue::Set(self.season_start),
            season_end: ActiveValue::Set(self.season_end),
            season_number: ActiveValue::Set(self.season_number),
            continuation_id: ActiveValue::Set(self.continuation_id),
            roster_open: ActiveValue::Set(self.roster_open),
            managers: ActiveValue::Set(self.managers),
            players: ActiveValue::Set(self.players),
            requests: ActiveValue::Set(self.requests),
            designation: ActiveValue::Set(self.designation),
            verified: ActiveValue::Set(self.verified),
            created_at: ActiveValue::Set(self.created_at),
            archived_at: ActiveValue::Set(self.archived_at),
        }
    }

    /// The entry added to a former member's `archive_teams` cache.
    pub fn snapshot(&self) -> TeamSnapshot {
        TeamSnapshot {
            id: self.id,
            place: self.place.clone(),
            name: self.name.clone(),
            teamname: self.teamname.clone(),
            season_start: self.season_start,
            season_end: self.season_end,
            season_number: self.season_number,
            verified: self.verified,
            designation: self.designation,
        }
    }

    pub fn into_dto(self) -> ArchiveTeamDto {
        ArchiveTeamDto {
            id: self.id,
            place: self.place,
            name: self.name,
            teamname: self.teamname,
            season_start: self.season_start,
            season_end: self.season_end,
            season_number: self.season_number,
            continuation_id: self.continuation_id,
            managers: self.managers.0,
            players: self.players.0,
            designation: self.designation,
            verified: self.verified,
            archived_at: self.archived_at,
        }
    }
}

/// Fields supplied when creating the first season of a lineage.
#[derive(Debug, Clone, Validate)]
pub struct CreateTeamParam {
    #[validate(length(min = 1))]
    pub place: String,
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub teamname: String,
    pub season_start: DateTime<Utc>,
    pub season_end: DateTime<Utc>,
    pub designation: Option<Uuid>,
}

impl CreateTeamParam {
    pub fn from_dto(dto: CreateTeamDto) -> Self {
        Self {
            place: dto.place,
            name: dto.name,
            teamname: dto.teamname,
            season_start: dto.season_start,
            season_end: dto.season_end,
            designation: dto.designation,
        }
    }

    pub fn normalized(self) -> Self {
        Self {
            place: self.place.trim().to_string(),
            name: self.name.trim().to_string(),
            teamname: self.teamname.trim().to_string(),
            ..self
        }
    }
}

/// Parameters for rolling a team over into its next season.
#[derive(Debug, Clone)]
pub struct RolloverParam {
    pub manager_id: Uuid,
    pub team_id: Uuid,
    /// Carry the current roster into the new season.
    pub copy_players: bool,
    pub season_start: DateTime<Utc>,
    pub season_end: DateTime<Utc>,
}

impl RolloverParam {
    pub fn from_dto(manager_id: Uuid, team_id: Uuid, dto: RolloverDto) -> Self {
        Self {
            manager_id,
            team_id,
            copy_players: dto.copy_players,
            season_start: dto.season_start,
            season_end: dto.season_end,
        }
    }
}

/// Parameters for adding a guest placeholder to a roster.
#[derive(Debug, Clone, Validate)]
pub struct AddGuestParam {
    pub manager_id: Uuid,
    pub team_id: Uuid,
    #[validate(length(min = 1))]
    pub first_name: String,
    #[validate(length(min = 1))]
    pub last_name: String,
    /// Domain used for the synthetic guest email address.
    pub email_domain: String,
}

impl AddGuestParam {
    pub fn from_dto(
        manager_id: Uuid,
        team_id: Uuid,
        email_domain: String,
        dto: AddGuestDto,
    ) -> Self {
        Self {
            manager_id,
            team_id,
            first_name: dto.first_name,
            last_name: dto.last_name,
            email_domain,
        }
    }

    pub fn normalized(self) -> Self {
        Self {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            ..self
        }
    }
}
