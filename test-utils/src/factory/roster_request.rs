//! Roster request factory.

use chrono::Utc;
use entity::sea_orm_active_enums::{RequestSource, RequestStatus};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for roster request records.
///
/// Only the request document is written; queue membership on the user and team is the
/// caller's responsibility.
pub struct RosterRequestFactory<'a> {
    db: &'a DatabaseConnection,
    team_id: Uuid,
    user_id: Uuid,
    request_source: RequestSource,
    status: RequestStatus,
}

impl<'a> RosterRequestFactory<'a> {
    /// Defaults to a pending, team-initiated request.
    pub fn new(db: &'a DatabaseConnection, team_id: Uuid, user_id: Uuid) -> Self {
        Self {
            db,
            team_id,
            user_id,
            request_source: RequestSource::Team,
            status: RequestStatus::Pending,
        }
    }

    pub fn source(mut self, source: RequestSource) -> Self {
        self.request_source = source;
        self
    }

    pub fn status(mut self, status: RequestStatus) -> Self {
        self.status = status;
        self
    }

    pub async fn build(self) -> Result<entity::roster_request::Model, DbErr> {
        entity::roster_request::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            team_id: ActiveValue::Set(self.team_id),
            user_id: ActiveValue::Set(self.user_id),
            request_source: ActiveValue::Set(self.request_source),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending, team-initiated request record.
pub async fn create_roster_request(
    db: &DatabaseConnection,
    team_id: Uuid,
    user_id: Uuid,
) -> Result<entity::roster_request::Model, DbErr> {
    RosterRequestFactory::new(db, team_id, user_id).build().await
}
