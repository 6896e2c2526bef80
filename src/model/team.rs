use chrono::{DateTime, Utc};
use entity::embedded::UserSnapshot;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Live team as returned to clients; `requests` is omitted from public projections.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TeamDto {
    pub id: Uuid,
    pub place: String,
    pub name: String,
    pub teamname: String,
    pub season_start: DateTime<Utc>,
    pub season_end: DateTime<Utc>,
    pub season_number: i32,
    pub continuation_id: Uuid,
    pub roster_open: bool,
    pub managers: Vec<UserSnapshot>,
    pub players: Vec<UserSnapshot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requests: Option<Vec<Uuid>>,
    pub designation: Option<Uuid>,
    pub verified: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ArchiveTeamDto {
    pub id: Uuid,
    pub place: String,
    pub name: String,
    pub teamname: String,
    pub season_start: DateTime<Utc>,
    pub season_end: DateTime<Utc>,
    pub season_number: i32,
    pub continuation_id: Uuid,
    pub managers: Vec<UserSnapshot>,
    pub players: Vec<UserSnapshot>,
    pub designation: Option<Uuid>,
    pub verified: bool,
    pub archived_at: DateTime<Utc>,
}

/// Minimal team fields embedded in request listings.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TeamSummaryDto {
    pub id: Uuid,
    pub place: String,
    pub name: String,
    pub teamname: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateTeamDto {
    pub place: String,
    pub name: String,
    pub teamname: String,
    pub season_start: DateTime<Utc>,
    pub season_end: DateTime<Utc>,
    pub designation: Option<Uuid>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RolloverDto {
    pub copy_players: bool,
    pub season_start: DateTime<Utc>,
    pub season_end: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RosterOpenDto {
    pub open: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TeamMemberDto {
    pub user_id: Uuid,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AddGuestDto {
    pub first_name: String,
    pub last_name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct JoinWithCodeDto {
    pub code: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SetDesignationDto {
    pub designation: Option<Uuid>,
}
