//! Checks over the two-sided membership caches.
//!
//! Membership is stored on both the team (`managers` / `players`) and the user
//! (`manager_teams` / `player_teams`). Positive checks require both sides to agree;
//! a disagreement is treated as "not a member".

use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    error::{auth::AuthError, roster::RosterError, AppError},
    model::{team::Team, user::User},
    validator::{lookup, Check},
};

fn manages(user: &User, team: &Team) -> (bool, bool) {
    (
        team.managers.contains(user.id),
        user.manager_teams.contains(team.id),
    )
}

fn plays(user: &User, team: &Team) -> (bool, bool) {
    (
        team.players.contains(user.id),
        user.player_teams.contains(team.id),
    )
}

/// Passes only when the team lists the user as a manager AND the user lists the team
/// in `manager_teams`.
pub struct UserIsManager {
    pub user_id: Uuid,
    pub team_id: Uuid,
}

#[async_trait]
impl Check for UserIsManager {
    async fn check(&self, db: &DatabaseConnection) -> Result<(), AppError> {
        let team = lookup::team(db, self.team_id).await?;
        let user = lookup::user(db, self.user_id).await?;

        match manages(&user, &team) {
            (true, true) => Ok(()),
            _ => Err(AuthError::NotManager {
                user_id: self.user_id,
                team_id: self.team_id,
            }
            .into()),
        }
    }
}

/// Fails `AlreadyManages` when the user is a manager on both sides.
pub struct UserIsNotManager {
    pub user_id: Uuid,
    pub team_id: Uuid,
}

#[async_trait]
impl Check for UserIsNotManager {
    async fn check(&self, db: &DatabaseConnection) -> Result<(), AppError> {
        let team = lookup::team(db, self.team_id).await?;
        let user = lookup::user(db, self.user_id).await?;

        match manages(&user, &team) {
            (true, true) => Err(RosterError::AlreadyManages.into()),
            _ => Ok(()),
        }
    }
}

/// Fails `PlayerAlreadyRostered` when either side records the membership.
pub struct UserNotOnTeam {
    pub user_id: Uuid,
    pub team_id: Uuid,
}

#[async_trait]
impl Check for UserNotOnTeam {
    async fn check(&self, db: &DatabaseConnection) -> Result<(), AppError> {
        let team = lookup::team(db, self.team_id).await?;
        let user = lookup::user(db, self.user_id).await?;

        match plays(&user, &team) {
            (false, false) => Ok(()),
            _ => Err(RosterError::PlayerAlreadyRostered.into()),
        }
    }
}

/// Fails `PlayerNotOnTeam` unless both sides record the membership.
pub struct UserOnTeam {
    pub user_id: Uuid,
    pub team_id: Uuid,
}

#[async_trait]
impl Check for UserOnTeam {
    async fn check(&self, db: &DatabaseConnection) -> Result<(), AppError> {
        let team = lookup::team(db, self.team_id).await?;
        let user = lookup::user(db, self.user_id).await?;

        match plays(&user, &team) {
            (true, true) => Ok(()),
            _ => Err(RosterError::PlayerNotOnTeam.into()),
        }
    }
}

pub struct UserIsGuest(pub Uuid);

#[async_trait]
impl Check for UserIsGuest {
    async fn check(&self, db: &DatabaseConnection) -> Result<(), AppError> {
        let user = lookup::user(db, self.0).await?;

        if user.guest {
            Ok(())
        } else {
            Err(RosterError::UserNotGuest.into())
        }
    }
}

/// Fails `GuestAccount` for placeholder users.
pub struct UserIsNotGuest(pub Uuid);

#[async_trait]
impl Check for UserIsNotGuest {
    async fn check(&self, db: &DatabaseConnection) -> Result<(), AppError> {
        let user = lookup::user(db, self.0).await?;

        if user.guest {
            Err(RosterError::GuestAccount.into())
        } else {
            Ok(())
        }
    }
}

/// Fails `OnlyManagerCannotLeave` when the team has at most one manager.
pub struct TeamHasOtherManagers(pub Uuid);

#[async_trait]
impl Check for TeamHasOtherManagers {
    async fn check(&self, db: &DatabaseConnection) -> Result<(), AppError> {
        let team = lookup::team(db, self.0).await?;

        if team.managers.len() > 1 {
            Ok(())
        } else {
            Err(RosterError::OnlyManagerCannotLeave.into())
        }
    }
}

/// Fails `MustBeOnlyManager` unless the team has exactly one manager.
pub struct TeamHasSingleManager(pub Uuid);

#[async_trait]
impl Check for TeamHasSingleManager {
    async fn check(&self, db: &DatabaseConnection) -> Result<(), AppError> {
        let team = lookup::team(db, self.0).await?;

        if team.managers.len() == 1 {
            Ok(())
        } else {
            Err(RosterError::MustBeOnlyManager.into())
        }
    }
}

pub struct UserAcceptingRequests(pub Uuid);

#[async_trait]
impl Check for UserAcceptingRequests {
    async fn check(&self, db: &DatabaseConnection) -> Result<(), AppError> {
        let user = lookup::user(db, self.0).await?;

        if user.open_to_requests {
            Ok(())
        } else {
            Err(RosterError::NotAcceptingRequests.into())
        }
    }
}

pub struct TeamAcceptingRequests(pub Uuid);

#[async_trait]
impl Check for TeamAcceptingRequests {
    async fn check(&self, db: &DatabaseConnection) -> Result<(), AppError> {
        let team = lookup::team(db, self.0).await?;

        if team.roster_open {
            Ok(())
        } else {
            Err(RosterError::NotAcceptingRequests.into())
        }
    }
}
