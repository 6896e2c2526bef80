use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::RequestStatus;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct VerificationRequestDto {
    pub id: Uuid,
    pub team_id: Uuid,
    pub requester_id: Uuid,
    pub status: RequestStatus,
    pub created_at: DateTime<Utc>,
}
