//! Checks over caller-supplied values.

use async_trait::async_trait;
use chrono::{DateTime, Datelike, Utc};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    error::{roster::RosterError, AppError},
    util::search::MIN_TOKEN_LENGTH,
    validator::{lookup, Check},
};

pub struct EnoughSearchCharacters(pub String);

#[async_trait]
impl Check for EnoughSearchCharacters {
    async fn check(&self, _db: &DatabaseConnection) -> Result<(), AppError> {
        if self.0.trim().chars().count() >= MIN_TOKEN_LENGTH {
            Ok(())
        } else {
            Err(RosterError::NotEnoughSearchCharacters.into())
        }
    }
}

/// Both dates must fall in the current or next calendar year and the season must not
/// end before it starts.
pub struct ValidSeasonDates {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub now: DateTime<Utc>,
}

impl ValidSeasonDates {
    pub fn is_valid(&self) -> bool {
        let allowed = [self.now.year(), self.now.year() + 1];

        allowed.contains(&self.start.year())
            && allowed.contains(&self.end.year())
            && self.end >= self.start
    }
}

#[async_trait]
impl Check for ValidSeasonDates {
    async fn check(&self, _db: &DatabaseConnection) -> Result<(), AppError> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(RosterError::InvalidSeasonDate.into())
        }
    }
}

/// Fails `SeasonStartsBeforeCurrentEnd` when a new season would start in a year
/// before the team's current season ends.
pub struct SeasonFollowsCurrent {
    pub team_id: Uuid,
    pub start: DateTime<Utc>,
}

#[async_trait]
impl Check for SeasonFollowsCurrent {
    async fn check(&self, db: &DatabaseConnection) -> Result<(), AppError> {
        let team = lookup::team(db, self.team_id).await?;

        if self.start.year() < team.season_end.year() {
            Err(RosterError::SeasonStartsBeforeCurrentEnd.into())
        } else {
            Ok(())
        }
    }
}
