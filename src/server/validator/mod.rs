//! Declarative precondition checks run before every mutating operation.
//!
//! A [`ValidatorChain`] collects [`Check`] strategy objects through fluent builder
//! methods and runs them in declaration order with [`ValidatorChain::test`]. The first
//! failing check short-circuits the chain and its error is returned; later checks never
//! touch the database.
//!
//! ```rust,ignore
//! ValidatorChain::new(db)
//!     .user_is_manager(manager_id, team_id)
//!     .no_pending_request(user_id, team_id)
//!     .user_not_on_team(user_id, team_id)
//!     .user_accepting_requests(user_id)
//!     .test()
//!     .await?;
//! ```
//!
//! Checks load fresh documents on every run, so a chain is only as current as the
//! moment it is tested. Nothing here takes a lock.

pub mod admin;
pub mod existence;
pub mod input;
pub mod lookup;
pub mod membership;
pub mod request;

#[cfg(test)]
mod test;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::RequestSource;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{config::AdminAllowList, error::AppError};

use self::{
    admin::UserIsAdmin,
    existence::{RequestExists, TeamExists, UserExists},
    input::{EnoughSearchCharacters, SeasonFollowsCurrent, ValidSeasonDates},
    membership::{
        TeamAcceptingRequests, TeamHasOtherManagers, TeamHasSingleManager,
        UserAcceptingRequests, UserIsGuest, UserIsManager, UserIsNotGuest, UserIsNotManager,
        UserNotOnTeam, UserOnTeam,
    },
    request::{
        ClaimGuestRequestDoesNotExist, NoPendingRequest, RequestInitiatedBy, RequestIsPending,
        TeamContainsRequest, UserAuthorizedForRequest, UserContainsRequest, UserOnRequest,
    },
};

/// A single precondition evaluated against the current store.
#[async_trait]
pub trait Check: Send + Sync {
    async fn check(&self, db: &DatabaseConnection) -> Result<(), AppError>;
}

/// Ordered list of checks evaluated until the first failure.
pub struct ValidatorChain<'a> {
    db: &'a DatabaseConnection,
    checks: Vec<Box<dyn Check + 'a>>,
}

impl<'a> ValidatorChain<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            checks: Vec::new(),
        }
    }

    /// Appends an arbitrary check.
    pub fn with(mut self, check: impl Check + 'a) -> Self {
        self.checks.push(Box::new(check));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// Runs every check in declaration order.
    ///
    /// # Returns
    /// - `Ok(())` - Every check passed (trivially true for an empty chain)
    /// - `Err(AppError)` - The error of the first failing check
    pub async fn test(self) -> Result<(), AppError> {
        for check in &self.checks {
            check.check(self.db).await?;
        }

        Ok(())
    }

    pub fn user_exists(self, user_id: Uuid) -> Self {
        self.with(UserExists(user_id))
    }

    pub fn team_exists(self, team_id: Uuid) -> Self {
        self.with(TeamExists(team_id))
    }

    pub fn request_exists(self, request_id: Uuid) -> Self {
        self.with(RequestExists(request_id))
    }

    pub fn user_is_manager(self, user_id: Uuid, team_id: Uuid) -> Self {
        self.with(UserIsManager { user_id, team_id })
    }

    pub fn user_is_not_manager(self, user_id: Uuid, team_id: Uuid) -> Self {
        self.with(UserIsNotManager { user_id, team_id })
    }

    pub fn no_pending_request(self, user_id: Uuid, team_id: Uuid) -> Self {
        self.with(NoPendingRequest { user_id, team_id })
    }

    pub fn user_not_on_team(self, user_id: Uuid, team_id: Uuid) -> Self {
        self.with(UserNotOnTeam { user_id, team_id })
    }

    pub fn user_on_team(self, user_id: Uuid, team_id: Uuid) -> Self {
        self.with(UserOnTeam { user_id, team_id })
    }

    pub fn request_is_team_initiated(self, request_id: Uuid) -> Self {
        self.with(RequestInitiatedBy {
            request_id,
            source: RequestSource::Team,
        })
    }

    pub fn request_is_user_initiated(self, request_id: Uuid) -> Self {
        self.with(RequestInitiatedBy {
            request_id,
            source: RequestSource::Player,
        })
    }

    pub fn request_is_pending(self, request_id: Uuid) -> Self {
        self.with(RequestIsPending(request_id))
    }

    pub fn user_on_request(self, user_id: Uuid, request_id: Uuid) -> Self {
        self.with(UserOnRequest {
            user_id,
            request_id,
        })
    }

    pub fn team_contains_request(self, team_id: Uuid, request_id: Uuid) -> Self {
        self.with(TeamContainsRequest {
            team_id,
            request_id,
        })
    }

    pub fn user_contains_request(self, user_id: Uuid, request_id: Uuid) -> Self {
        self.with(UserContainsRequest {
            user_id,
            request_id,
        })
    }

    pub fn user_accepting_requests(self, user_id: Uuid) -> Self {
        self.with(UserAcceptingRequests(user_id))
    }

    pub fn team_accepting_requests(self, team_id: Uuid) -> Self {
        self.with(TeamAcceptingRequests(team_id))
    }

    pub fn enough_search_characters(self, term: &str) -> Self {
        self.with(EnoughSearchCharacters(term.to_string()))
    }

    /// Season bounds relative to the current calendar year.
    pub fn valid_season_dates(self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        self.with(ValidSeasonDates {
            start,
            end,
            now: Utc::now(),
        })
    }

    pub fn season_follows_current(self, team_id: Uuid, start: DateTime<Utc>) -> Self {
        self.with(SeasonFollowsCurrent { team_id, start })
    }

    pub fn user_is_admin(self, user_id: Uuid, admins: &'a AdminAllowList) -> Self {
        self.with(UserIsAdmin { user_id, admins })
    }

    pub fn user_is_guest(self, user_id: Uuid) -> Self {
        self.with(UserIsGuest(user_id))
    }

    pub fn user_is_not_guest(self, user_id: Uuid) -> Self {
        self.with(UserIsNotGuest(user_id))
    }

    pub fn team_has_other_managers(self, team_id: Uuid) -> Self {
        self.with(TeamHasOtherManagers(team_id))
    }

    pub fn team_has_single_manager(self, team_id: Uuid) -> Self {
        self.with(TeamHasSingleManager(team_id))
    }

    pub fn claim_guest_request_does_not_exist(
        self,
        user_id: Uuid,
        guest_id: Uuid,
        team_id: Uuid,
    ) -> Self {
        self.with(ClaimGuestRequestDoesNotExist {
            user_id,
            guest_id,
            team_id,
        })
    }

    pub fn user_authorized_for_request(self, user_id: Uuid, request_id: Uuid) -> Self {
        self.with(UserAuthorizedForRequest {
            user_id,
            request_id,
        })
    }
}
