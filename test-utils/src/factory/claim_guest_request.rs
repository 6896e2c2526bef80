//! Claim guest request factory.

use chrono::Utc;
use entity::sea_orm_active_enums::RequestStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Creates a pending claim of `guest_id` by `user_id` on `team_id`.
///
/// # Returns
/// - `Ok(entity::claim_guest_request::Model)` - Created request
/// - `Err(DbErr)` - Database error during insert
pub async fn create_claim_guest_request(
    db: &DatabaseConnection,
    user_id: Uuid,
    guest_id: Uuid,
    team_id: Uuid,
) -> Result<entity::claim_guest_request::Model, DbErr> {
    entity::claim_guest_request::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        guest_id: ActiveValue::Set(guest_id),
        user_id: ActiveValue::Set(user_id),
        team_id: ActiveValue::Set(team_id),
        status: ActiveValue::Set(RequestStatus::Pending),
        created_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}

