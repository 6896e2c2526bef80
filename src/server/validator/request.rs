//! Checks over roster and claim requests.

use async_trait::async_trait;
use entity::sea_orm_active_enums::{RequestSource, RequestStatus};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::{
        claim_guest_request::ClaimGuestRequestRepository,
        roster_request::RosterRequestRepository,
    },
    error::{auth::AuthError, roster::RosterError, AppError},
    validator::{lookup, Check},
};

/// Fails when any pending request exists for the pair.
///
/// The error names the side that created the existing request.
pub struct NoPendingRequest {
    pub user_id: Uuid,
    pub team_id: Uuid,
}

#[async_trait]
impl Check for NoPendingRequest {
    async fn check(&self, db: &DatabaseConnection) -> Result<(), AppError> {
        let existing = RosterRequestRepository::new(db)
            .find_pending_for_pair(self.user_id, self.team_id)
            .await?;

        match existing.map(|request| request.request_source) {
            None => Ok(()),
            Some(RequestSource::Team) => Err(RosterError::TeamAlreadyRequested.into()),
            Some(RequestSource::Player) => Err(RosterError::PlayerAlreadyRequested.into()),
        }
    }
}

/// Fails `NotAllowedToRespond` unless the request was created by the given side.
pub struct RequestInitiatedBy {
    pub request_id: Uuid,
    pub source: RequestSource,
}

#[async_trait]
impl Check for RequestInitiatedBy {
    async fn check(&self, db: &DatabaseConnection) -> Result<(), AppError> {
        let request = lookup::roster_request(db, self.request_id).await?;

        if request.request_source == self.source {
            Ok(())
        } else {
            Err(RosterError::NotAllowedToRespond.into())
        }
    }
}

pub struct RequestIsPending(pub Uuid);

#[async_trait]
impl Check for RequestIsPending {
    async fn check(&self, db: &DatabaseConnection) -> Result<(), AppError> {
        let request = lookup::roster_request(db, self.0).await?;

        if request.status == RequestStatus::Pending {
            Ok(())
        } else {
            Err(RosterError::RequestAlreadyResolved.into())
        }
    }
}

pub struct UserOnRequest {
    pub user_id: Uuid,
    pub request_id: Uuid,
}

#[async_trait]
impl Check for UserOnRequest {
    async fn check(&self, db: &DatabaseConnection) -> Result<(), AppError> {
        let request = lookup::roster_request(db, self.request_id).await?;

        if request.user_id == self.user_id {
            Ok(())
        } else {
            Err(RosterError::NotAllowedToRespond.into())
        }
    }
}

pub struct TeamContainsRequest {
    pub team_id: Uuid,
    pub request_id: Uuid,
}

#[async_trait]
impl Check for TeamContainsRequest {
    async fn check(&self, db: &DatabaseConnection) -> Result<(), AppError> {
        let team = lookup::team(db, self.team_id).await?;

        if team.requests.contains(self.request_id) {
            Ok(())
        } else {
            Err(RosterError::RequestNotInList.into())
        }
    }
}

pub struct UserContainsRequest {
    pub user_id: Uuid,
    pub request_id: Uuid,
}

#[async_trait]
impl Check for UserContainsRequest {
    async fn check(&self, db: &DatabaseConnection) -> Result<(), AppError> {
        let user = lookup::user(db, self.user_id).await?;

        if user.requests.contains(self.request_id) {
            Ok(())
        } else {
            Err(RosterError::RequestNotInList.into())
        }
    }
}

/// Passes for the request's user or a manager (both sides) of the request's team.
///
/// A request whose team no longer exists is visible only to its user.
pub struct UserAuthorizedForRequest {
    pub user_id: Uuid,
    pub request_id: Uuid,
}

#[async_trait]
impl Check for UserAuthorizedForRequest {
    async fn check(&self, db: &DatabaseConnection) -> Result<(), AppError> {
        let request = lookup::roster_request(db, self.request_id).await?;
        if request.user_id == self.user_id {
            return Ok(());
        }

        let user = lookup::user(db, self.user_id).await?;
        let manages = match lookup::team(db, request.team_id).await {
            Ok(team) => {
                team.managers.contains(user.id) && user.manager_teams.contains(team.id)
            }
            Err(AppError::RosterErr(RosterError::TeamNotFound(_))) => false,
            Err(err) => return Err(err),
        };

        if manages {
            Ok(())
        } else {
            Err(AuthError::NotAuthorizedForRequest {
                user_id: self.user_id,
                request_id: self.request_id,
            }
            .into())
        }
    }
}

pub struct ClaimGuestRequestDoesNotExist {
    pub user_id: Uuid,
    pub guest_id: Uuid,
    pub team_id: Uuid,
}

#[async_trait]
impl Check for ClaimGuestRequestDoesNotExist {
    async fn check(&self, db: &DatabaseConnection) -> Result<(), AppError> {
        let existing = ClaimGuestRequestRepository::new(db)
            .find_pending(self.user_id, self.guest_id, self.team_id)
            .await?;

        match existing {
            None => Ok(()),
            Some(_) => Err(RosterError::ClaimRequestExists.into()),
        }
    }
}
