use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::OtpReason;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PasscodeDto {
    pub code: String,
    pub reason: OtpReason,
    pub team_id: Option<Uuid>,
    pub expires_at: DateTime<Utc>,
}
