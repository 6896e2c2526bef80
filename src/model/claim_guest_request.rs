use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::RequestStatus;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ClaimGuestRequestDto {
    pub id: Uuid,
    pub guest_id: Uuid,
    pub user_id: Uuid,
    pub team_id: Uuid,
    pub status: RequestStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateClaimGuestRequestDto {
    pub guest_id: Uuid,
    pub team_id: Uuid,
}
