//! One-time passcodes for password recovery and team join codes.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::OtpReason;
use rand::Rng;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::one_time_passcode::OneTimePasscodeRepository,
    error::AppError,
    model::passcode::{CreatePasscodeParam, OneTimePasscode},
};

/// Attempts before giving up on finding an unused code.
const MAX_CODE_ATTEMPTS: usize = 50;

pub struct PasscodeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PasscodeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Issues a passcode with a random six digit code not currently in use.
    ///
    /// # Returns
    /// - `Ok(OneTimePasscode)` - The stored passcode
    /// - `Err(AppError::InternalError)` - No free code found after repeated attempts
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, param: CreatePasscodeParam) -> Result<OneTimePasscode, AppError> {
        let repo = OneTimePasscodeRepository::new(self.db);

        for _ in 0..MAX_CODE_ATTEMPTS {
            let code = Self::generate_code();
            if repo.code_exists(&code).await? {
                continue;
            }

            return Ok(repo.create(code, param).await?);
        }

        Err(AppError::InternalError(
            "Failed to generate a unique passcode".to_string(),
        ))
    }

    /// Finds an unexpired passcode with the given code and reason.
    pub async fn find_valid(
        &self,
        code: &str,
        reason: OtpReason,
        now: DateTime<Utc>,
    ) -> Result<Option<OneTimePasscode>, AppError> {
        let passcode = OneTimePasscodeRepository::new(self.db)
            .find_by_code(code.trim(), reason)
            .await?;

        Ok(passcode.filter(|p| !p.is_expired(now)))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        OneTimePasscodeRepository::new(self.db).delete(id).await?;

        Ok(())
    }

    /// Deletes every expired passcode, returning how many were removed.
    pub async fn sweep_expired(&self, now: DateTime<Utc>) -> Result<u64, AppError> {
        Ok(OneTimePasscodeRepository::new(self.db)
            .delete_expired(now)
            .await?)
    }

    fn generate_code() -> String {
        let mut rng = rand::rng();
        format!("{:06}", rng.random_range(0..1_000_000u32))
    }
}
