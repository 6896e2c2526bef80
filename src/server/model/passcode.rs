use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::OtpReason;
use uuid::Uuid;

use crate::model::passcode::PasscodeDto;

#[derive(Debug, Clone, PartialEq)]
pub struct OneTimePasscode {
    pub id: Uuid,
    pub code: String,
    pub creator_id: Uuid,
    pub reason: OtpReason,
    pub team_id: Option<Uuid>,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl OneTimePasscode {
    pub fn from_entity(entity: entity::one_time_passcode::Model) -> Self {
        Self {
            id: entity.id,
            code: entity.code,
            creator_id: entity.creator_id,
            reason: entity.reason,
            team_id: entity.team_id,
            expires_at: entity.expires_at,
            created_at: entity.created_at,
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    pub fn into_dto(self) -> PasscodeDto {
        PasscodeDto {
            code: self.code,
            reason: self.reason,
            team_id: self.team_id,
            expires_at: self.expires_at,
        }
    }
}

/// Parameters for issuing a passcode.
#[derive(Debug, Clone)]
pub struct CreatePasscodeParam {
    pub creator_id: Uuid,
    pub reason: OtpReason,
    pub team_id: Option<Uuid>,
    pub expires_at: DateTime<Utc>,
}
