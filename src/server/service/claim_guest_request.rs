//! Guest claims.
//!
//! A real user asks to take over a guest placeholder's history through one of the
//! guest's teams, and a manager of that team accepts or denies. Acceptance moves every
//! roster spot and archive entry of the guest onto the user, denies competing claims
//! and deletes the guest.

use entity::sea_orm_active_enums::RequestStatus;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::{
        claim_guest_request::ClaimGuestRequestRepository, team::TeamRepository,
        user::UserRepository,
    },
    error::{roster::RosterError, AppError},
    model::{claim_guest_request::ClaimGuestRequest, user::User},
    service::membership::{self, QueueOwner},
    validator::{lookup, ValidatorChain},
};

pub struct ClaimGuestRequestService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClaimGuestRequestService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Files a pending claim of a guest rostered on `team_id`.
    ///
    /// # Returns
    /// - `Ok(ClaimGuestRequest)` - The pending claim
    /// - `Err(AppError::RosterErr(UserNotGuest))` - Target is a real account
    /// - `Err(AppError::RosterErr(PlayerNotOnTeam))` - Guest is not on the team
    /// - `Err(AppError::RosterErr(ClaimRequestExists))` - Same claim already pending
    pub async fn create(
        &self,
        user_id: Uuid,
        guest_id: Uuid,
        team_id: Uuid,
    ) -> Result<ClaimGuestRequest, AppError> {
        ValidatorChain::new(self.db)
            .user_exists(user_id)
            .user_is_not_guest(user_id)
            .user_exists(guest_id)
            .user_is_guest(guest_id)
            .user_on_team(guest_id, team_id)
            .claim_guest_request_does_not_exist(user_id, guest_id, team_id)
            .test()
            .await?;

        let claim = ClaimGuestRequestRepository::new(self.db)
            .create(user_id, guest_id, team_id)
            .await?;

        tracing::debug!("User {} claimed guest {} via team {}", user_id, guest_id, team_id);

        Ok(claim)
    }

    /// A manager of the claim's team lists its pending claims.
    pub async fn get_by_team(
        &self,
        manager_id: Uuid,
        team_id: Uuid,
    ) -> Result<Vec<ClaimGuestRequest>, AppError> {
        ValidatorChain::new(self.db)
            .user_is_manager(manager_id, team_id)
            .test()
            .await?;

        Ok(ClaimGuestRequestRepository::new(self.db)
            .find_pending_by_team(team_id)
            .await?)
    }

    pub async fn deny(
        &self,
        manager_id: Uuid,
        request_id: Uuid,
    ) -> Result<ClaimGuestRequest, AppError> {
        let claim = self.pending_for_manager(manager_id, request_id).await?;

        self.set_status(claim.id, RequestStatus::Denied).await
    }

    /// Merges the guest into the claimant and deletes the guest.
    ///
    /// On live teams the claimant takes the guest's roster spot, or the guest is simply
    /// dropped when the claimant is already rostered. Archive entries are merged without
    /// duplicates. Every other pending claim on the guest is denied.
    ///
    /// # Returns
    /// - `Ok(ClaimGuestRequest)` - The approved claim
    /// - `Err(AppError::AuthErr(NotManager))` - Responder does not manage the claim's team
    /// - `Err(AppError::RosterErr(RequestAlreadyResolved))` - Claim is not pending
    pub async fn accept(
        &self,
        manager_id: Uuid,
        request_id: Uuid,
    ) -> Result<ClaimGuestRequest, AppError> {
        let claim = self.pending_for_manager(manager_id, request_id).await?;

        let user = lookup::user(self.db, claim.user_id).await?;
        let guest = lookup::user(self.db, claim.guest_id).await?;
        if !guest.guest {
            return Err(RosterError::UserNotGuest.into());
        }

        let user = self.merge_guest(user, &guest).await?;

        let approved = self.set_status(claim.id, RequestStatus::Approved).await?;
        let claims = ClaimGuestRequestRepository::new(self.db);
        for other in claims.find_pending_by_guest(guest.id).await? {
            claims.update_status(other.id, RequestStatus::Denied).await?;
        }

        membership::purge_requests(self.db, &guest.requests.0, QueueOwner::User).await?;
        UserRepository::new(self.db).delete(guest.id).await?;

        tracing::info!("Guest {} merged into user {}", guest.id, user.id);

        Ok(approved)
    }

    async fn merge_guest(&self, mut user: User, guest: &User) -> Result<User, AppError> {
        let teams = TeamRepository::new(self.db);
        let user_snapshot = user.snapshot();

        for team_id in guest.player_teams.ids() {
            let Some(mut team) = teams.find_by_id(team_id).await? else {
                tracing::warn!("Guest {} lists missing team {}", guest.id, team_id);
                continue;
            };

            if team.players.contains(user.id) {
                team.players.remove(guest.id);
            } else if let Some(spot) = team.players.0.iter_mut().find(|p| p.id == guest.id) {
                *spot = user_snapshot.clone();
            } else {
                team.players.push_unique(user_snapshot.clone());
            }

            let team = teams.save(team).await?;
            user.player_teams.push_unique(team.snapshot());
        }

        for archive in &guest.archive_teams.0 {
            user.archive_teams.push_unique(archive.clone());
        }

        Ok(UserRepository::new(self.db).save(user).await?)
    }

    /// Loads a claim that is still pending and that `manager_id` may resolve.
    async fn pending_for_manager(
        &self,
        manager_id: Uuid,
        request_id: Uuid,
    ) -> Result<ClaimGuestRequest, AppError> {
        let claim = lookup::claim_request(self.db, request_id).await?;

        ValidatorChain::new(self.db)
            .user_is_manager(manager_id, claim.team_id)
            .test()
            .await?;

        if claim.status != RequestStatus::Pending {
            return Err(RosterError::RequestAlreadyResolved.into());
        }

        Ok(claim)
    }

    async fn set_status(
        &self,
        request_id: Uuid,
        status: RequestStatus,
    ) -> Result<ClaimGuestRequest, AppError> {
        ClaimGuestRequestRepository::new(self.db)
            .update_status(request_id, status)
            .await?
            .ok_or_else(|| RosterError::ClaimRequestNotFound(request_id).into())
    }
}
