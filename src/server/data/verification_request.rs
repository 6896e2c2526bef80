//! Team verification request data repository.

use chrono::Utc;
use entity::sea_orm_active_enums::RequestStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::model::verification::VerificationRequest;

pub struct VerificationRequestRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VerificationRequestRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        team_id: Uuid,
        requester_id: Uuid,
    ) -> Result<VerificationRequest, DbErr> {
        let entity = entity::verification_request::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            team_id: ActiveValue::Set(team_id),
            requester_id: ActiveValue::Set(requester_id),
            status: ActiveValue::Set(RequestStatus::Pending),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(VerificationRequest::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<VerificationRequest>, DbErr> {
        let entity = entity::prelude::VerificationRequest::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(VerificationRequest::from_entity))
    }

    pub async fn find_pending_by_team(
        &self,
        team_id: Uuid,
    ) -> Result<Option<VerificationRequest>, DbErr> {
        let entity = entity::prelude::VerificationRequest::find()
            .filter(entity::verification_request::Column::TeamId.eq(team_id))
            .filter(entity::verification_request::Column::Status.eq(RequestStatus::Pending))
            .one(self.db)
            .await?;

        Ok(entity.map(VerificationRequest::from_entity))
    }

    /// Gets every pending verification request, oldest first.
    pub async fn get_pending(&self) -> Result<Vec<VerificationRequest>, DbErr> {
        let entities = entity::prelude::VerificationRequest::find()
            .filter(entity::verification_request::Column::Status.eq(RequestStatus::Pending))
            .order_by_asc(entity::verification_request::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(VerificationRequest::from_entity)
            .collect())
    }

    pub async fn update_status(
        &self,
        id: Uuid,
        status: RequestStatus,
    ) -> Result<Option<VerificationRequest>, DbErr> {
        let Some(entity) = entity::prelude::VerificationRequest::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        active.status = ActiveValue::Set(status);
        let entity = active.update(self.db).await?;

        Ok(Some(VerificationRequest::from_entity(entity)))
    }
}
