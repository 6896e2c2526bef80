use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::RequestStatus;
use uuid::Uuid;

use crate::model::claim_guest_request::ClaimGuestRequestDto;

/// Proposal to merge a guest placeholder into a real account.
#[derive(Debug, Clone, PartialEq)]
pub struct ClaimGuestRequest {
    pub id: Uuid,
    pub guest_id: Uuid,
    pub user_id: Uuid,
    pub team_id: Uuid,
    pub status: RequestStatus,
    pub created_at: DateTime<Utc>,
}

impl ClaimGuestRequest {
    pub fn from_entity(entity: entity::claim_guest_request::Model) -> Self {
        Self {
            id: entity.id,
            guest_id: entity.guest_id,
            user_id: entity.user_id,
            team_id: entity.team_id,
            status: entity.status,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> ClaimGuestRequestDto {
        ClaimGuestRequestDto {
            id: self.id,
            guest_id: self.guest_id,
            user_id: self.user_id,
            team_id: self.team_id,
            status: self.status,
            created_at: self.created_at,
        }
    }
}
