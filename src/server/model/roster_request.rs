use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{RequestSource, RequestStatus};
use uuid::Uuid;

use crate::{
    model::roster_request::RosterRequestDto,
    server::model::{team::Team, user::User},
};

/// A membership proposal between one user and one team.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterRequest {
    pub id: Uuid,
    pub team_id: Uuid,
    pub user_id: Uuid,
    pub request_source: RequestSource,
    pub status: RequestStatus,
    pub created_at: DateTime<Utc>,
}

impl RosterRequest {
    pub fn from_entity(entity: entity::roster_request::Model) -> Self {
        Self {
            id: entity.id,
            team_id: entity.team_id,
            user_id: entity.user_id,
            request_source: entity.request_source,
            status: entity.status,
            created_at: entity.created_at,
        }
    }
}

/// A request together with whichever of its two parties still exist.
#[derive(Debug, Clone)]
pub struct RosterRequestDetail {
    pub request: RosterRequest,
    pub team: Option<Team>,
    pub user: Option<User>,
}

impl RosterRequestDetail {
    pub fn into_dto(self) -> RosterRequestDto {
        RosterRequestDto {
            id: self.request.id,
            team_id: self.request.team_id,
            user_id: self.request.user_id,
            request_source: self.request.request_source,
            status: self.request.status,
            created_at: self.request.created_at,
            team: self.team.as_ref().map(Team::summary_dto),
            user: self.user.as_ref().map(User::summary_dto),
        }
    }
}
