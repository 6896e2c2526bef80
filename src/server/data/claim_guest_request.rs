//! Claim guest request data repository.

use chrono::Utc;
use entity::sea_orm_active_enums::RequestStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::model::claim_guest_request::ClaimGuestRequest;

pub struct ClaimGuestRequestRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClaimGuestRequestRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a pending claim of `guest_id` by `user_id`, made through `team_id`.
    pub async fn create(
        &self,
        user_id: Uuid,
        guest_id: Uuid,
        team_id: Uuid,
    ) -> Result<ClaimGuestRequest, DbErr> {
        let entity = entity::claim_guest_request::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            guest_id: ActiveValue::Set(guest_id),
            user_id: ActiveValue::Set(user_id),
            team_id: ActiveValue::Set(team_id),
            status: ActiveValue::Set(RequestStatus::Pending),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(ClaimGuestRequest::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<ClaimGuestRequest>, DbErr> {
        let entity = entity::prelude::ClaimGuestRequest::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(ClaimGuestRequest::from_entity))
    }

    /// Finds a pending claim matching all three parties.
    pub async fn find_pending(
        &self,
        user_id: Uuid,
        guest_id: Uuid,
        team_id: Uuid,
    ) -> Result<Option<ClaimGuestRequest>, DbErr> {
        let entity = entity::prelude::ClaimGuestRequest::find()
            .filter(entity::claim_guest_request::Column::UserId.eq(user_id))
            .filter(entity::claim_guest_request::Column::GuestId.eq(guest_id))
            .filter(entity::claim_guest_request::Column::TeamId.eq(team_id))
            .filter(entity::claim_guest_request::Column::Status.eq(RequestStatus::Pending))
            .one(self.db)
            .await?;

        Ok(entity.map(ClaimGuestRequest::from_entity))
    }

    /// Gets every pending claim on a guest, from any claimant.
    pub async fn find_pending_by_guest(
        &self,
        guest_id: Uuid,
    ) -> Result<Vec<ClaimGuestRequest>, DbErr> {
        let entities = entity::prelude::ClaimGuestRequest::find()
            .filter(entity::claim_guest_request::Column::GuestId.eq(guest_id))
            .filter(entity::claim_guest_request::Column::Status.eq(RequestStatus::Pending))
            .order_by_asc(entity::claim_guest_request::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(ClaimGuestRequest::from_entity)
            .collect())
    }

    pub async fn find_pending_by_team(
        &self,
        team_id: Uuid,
    ) -> Result<Vec<ClaimGuestRequest>, DbErr> {
        let entities = entity::prelude::ClaimGuestRequest::find()
            .filter(entity::claim_guest_request::Column::TeamId.eq(team_id))
            .filter(entity::claim_guest_request::Column::Status.eq(RequestStatus::Pending))
            .order_by_asc(entity::claim_guest_request::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(ClaimGuestRequest::from_entity)
            .collect())
    }

    pub async fn update_status(
        &self,
        id: Uuid,
        status: RequestStatus,
    ) -> Result<Option<ClaimGuestRequest>, DbErr> {
        let Some(entity) = entity::prelude::ClaimGuestRequest::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        active.status = ActiveValue::Set(status);
        let entity = active.update(self.db).await?;

        Ok(Some(ClaimGuestRequest::from_entity(entity)))
    }
}
