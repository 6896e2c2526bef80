use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::RequestStatus;
use uuid::Uuid;

use crate::model::verification::VerificationRequestDto;

/// A manager's request for an administrator to mark a team as verified.
#[derive(Debug, Clone, PartialEq)]
pub struct VerificationRequest {
    pub id: Uuid,
    pub team_id: Uuid,
    pub requester_id: Uuid,
    pub status: RequestStatus,
    pub created_at: DateTime<Utc>,
}

impl VerificationRequest {
    pub fn from_entity(entity: entity::verification_request::Model) -> Self {
        Self {
            id: entity.id,
            team_id: entity.team_id,
            requester_id: entity.requester_id,
            status: entity.status,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> VerificationRequestDto {
        VerificationRequestDto {
            id: self.id,
            team_id: self.team_id,
            requester_id: self.requester_id,
            status: self.status,
            created_at: self.created_at,
        }
    }
}
