//! One-time passcode data repository.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::OtpReason;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};
use uuid::Uuid;

use crate::server::model::passcode::{CreatePasscodeParam, OneTimePasscode};

pub struct OneTimePasscodeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OneTimePasscodeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a passcode with an already generated `code`.
    ///
    /// # Returns
    /// - `Ok(OneTimePasscode)` - The stored passcode
    /// - `Err(DbErr)` - Database error, including a unique violation on `code`
    pub async fn create(
        &self,
        code: String,
        param: CreatePasscodeParam,
    ) -> Result<OneTimePasscode, DbErr> {
        let entity = entity::one_time_passcode::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            code: ActiveValue::Set(code),
            creator_id: ActiveValue::Set(param.creator_id),
            reason: ActiveValue::Set(param.reason),
            team_id: ActiveValue::Set(param.team_id),
            expires_at: ActiveValue::Set(param.expires_at),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(OneTimePasscode::from_entity(entity))
    }

    pub async fn code_exists(&self, code: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::OneTimePasscode::find()
            .filter(entity::one_time_passcode::Column::Code.eq(code))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Finds a passcode by code and reason, regardless of expiry.
    pub async fn find_by_code(
        &self,
        code: &str,
        reason: OtpReason,
    ) -> Result<Option<OneTimePasscode>, DbErr> {
        let entity = entity::prelude::OneTimePasscode::find()
            .filter(entity::one_time_passcode::Column::Code.eq(code))
            .filter(entity::one_time_passcode::Column::Reason.eq(reason))
            .one(self.db)
            .await?;

        Ok(entity.map(OneTimePasscode::from_entity))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), DbErr> {
        entity::prelude::OneTimePasscode::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Deletes every passcode that expired at or before `now`.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of passcodes deleted
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64, DbErr> {
        let result = entity::prelude::OneTimePasscode::delete_many()
            .filter(entity::one_time_passcode::Column::ExpiresAt.lte(now))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
