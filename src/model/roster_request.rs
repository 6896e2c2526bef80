use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{RequestSource, RequestStatus};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::{team::TeamSummaryDto, user::UserSummaryDto};

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RosterRequestDto {
    pub id: Uuid,
    pub team_id: Uuid,
    pub user_id: Uuid,
    pub request_source: RequestSource,
    pub status: RequestStatus,
    pub created_at: DateTime<Utc>,
    /// Absent when the team no longer exists.
    pub team: Option<TeamSummaryDto>,
    /// Absent when the user no longer exists.
    pub user: Option<UserSummaryDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RequestFromTeamDto {
    pub team_id: Uuid,
    pub user_id: Uuid,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RequestFromPlayerDto {
    pub team_id: Uuid,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RespondDto {
    pub approve: bool,
}
