//! Roster request data repository.
//!
//! Requests are plain rows; the two queues that reference them (`user.requests` and
//! `team.requests`) are maintained by the service layer.

use chrono::Utc;
use entity::sea_orm_active_enums::{RequestSource, RequestStatus};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::model::roster_request::RosterRequest;

pub struct RosterRequestRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RosterRequestRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a pending request between `user_id` and `team_id`.
    ///
    /// # Arguments
    /// - `team_id` - Team party of the request
    /// - `user_id` - User party of the request
    /// - `source` - Which party initiated it
    ///
    /// # Returns
    /// - `Ok(RosterRequest)` - The created request with status `Pending`
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        team_id: Uuid,
        user_id: Uuid,
        source: RequestSource,
    ) -> Result<RosterRequest, DbErr> {
        let entity = entity::roster_request::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            team_id: ActiveValue::Set(team_id),
            user_id: ActiveValue::Set(user_id),
            request_source: ActiveValue::Set(source),
            status: ActiveValue::Set(RequestStatus::Pending),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(RosterRequest::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<RosterRequest>, DbErr> {
        let entity = entity::prelude::RosterRequest::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(RosterRequest::from_entity))
    }

    /// Finds the pending request for a user/team pair, whichever side initiated it.
    pub async fn find_pending_for_pair(
        &self,
        user_id: Uuid,
        team_id: Uuid,
    ) -> Result<Option<RosterRequest>, DbErr> {
        let entity = entity::prelude::RosterRequest::find()
            .filter(entity::roster_request::Column::UserId.eq(user_id))
            .filter(entity::roster_request::Column::TeamId.eq(team_id))
            .filter(entity::roster_request::Column::Status.eq(RequestStatus::Pending))
            .one(self.db)
            .await?;

        Ok(entity.map(RosterRequest::from_entity))
    }

    /// Loads the requests with the given ids, oldest first. Missing ids are skipped.
    pub async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<RosterRequest>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::RosterRequest::find()
            .filter(entity::roster_request::Column::Id.is_in(ids.to_vec()))
            .order_by_asc(entity::roster_request::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(RosterRequest::from_entity).collect())
    }

    /// Sets the status of a request.
    ///
    /// # Returns
    /// - `Ok(Some(RosterRequest))` - The updated request
    /// - `Ok(None)` - No request with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_status(
        &self,
        id: Uuid,
        status: RequestStatus,
    ) -> Result<Option<RosterRequest>, DbErr> {
        let Some(entity) = entity::prelude::RosterRequest::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        active.status = ActiveValue::Set(status);
        let entity = active.update(self.db).await?;

        Ok(Some(RosterRequest::from_entity(entity)))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), DbErr> {
        entity::prelude::RosterRequest::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
