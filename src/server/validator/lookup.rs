//! Load-or-404 helpers shared by checks and services.

use uuid::Uuid;

use crate::server::{
    data::{
        archive_team::ArchiveTeamRepository, claim_guest_request::ClaimGuestRequestRepository,
        roster_request::RosterRequestRepository, team::TeamRepository,
        team_designation::TeamDesignationRepository, user::UserRepository,
        verification_request::VerificationRequestRepository,
    },
    error::{roster::RosterError, AppError},
    model::{
        claim_guest_request::ClaimGuestRequest,
        designation::TeamDesignation,
        roster_request::RosterRequest,
        team::{ArchiveTeam, Team},
        user::User,
        verification::VerificationRequest,
    },
};
use sea_orm::DatabaseConnection;

pub async fn user(db: &DatabaseConnection, id: Uuid) -> Result<User, AppError> {
    UserRepository::new(db)
        .find_by_id(id)
        .await?
        .ok_or_else(|| RosterError::UserNotFound(id).into())
}

pub async fn team(db: &DatabaseConnection, id: Uuid) -> Result<Team, AppError> {
    TeamRepository::new(db)
        .find_by_id(id)
        .await?
        .ok_or_else(|| RosterError::TeamNotFound(id).into())
}

pub async fn archive_team(db: &DatabaseConnection, id: Uuid) -> Result<ArchiveTeam, AppError> {
    ArchiveTeamRepository::new(db)
        .find_by_id(id)
        .await?
        .ok_or_else(|| RosterError::ArchiveTeamNotFound(id).into())
}

pub async fn roster_request(db: &DatabaseConnection, id: Uuid) -> Result<RosterRequest, AppError> {
    RosterRequestRepository::new(db)
        .find_by_id(id)
        .await?
        .ok_or_else(|| RosterError::RequestNotFound(id).into())
}

pub async fn claim_request(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<ClaimGuestRequest, AppError> {
    ClaimGuestRequestRepository::new(db)
        .find_by_id(id)
        .await?
        .ok_or_else(|| RosterError::ClaimRequestNotFound(id).into())
}

pub async fn verification(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<VerificationRequest, AppError> {
    VerificationRequestRepository::new(db)
        .find_by_id(id)
        .await?
        .ok_or_else(|| RosterError::VerificationNotFound(id).into())
}

pub async fn designation(db: &DatabaseConnection, id: Uuid) -> Result<TeamDesignation, AppError> {
    TeamDesignationRepository::new(db)
        .find_by_id(id)
        .await?
        .ok_or_else(|| RosterError::DesignationNotFound(id).into())
}
