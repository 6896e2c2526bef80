//! Roster request lifecycle.
//!
//! A request is created `Pending` by either the team (a manager invites a user) or the
//! player (a user asks to join), and its id is appended to both parties' `requests`
//! queues. Responding moves it to `Approved` or `Denied` and clears it from the
//! responder's queue only, leaving it in the initiator's queue as a record of the
//! outcome. Deleting removes it from both queues and drops the record.

use entity::sea_orm_active_enums::{RequestSource, RequestStatus};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::{roster_request::RosterRequestRepository, team::TeamRepository, user::UserRepository},
    error::{roster::RosterError, AppError},
    model::roster_request::{RosterRequest, RosterRequestDetail},
    service::membership,
    validator::{lookup, ValidatorChain},
};

pub struct RosterRequestService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RosterRequestService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// A manager invites a user onto the team.
    ///
    /// # Returns
    /// - `Ok(RosterRequest)` - The pending team-initiated request
    /// - `Err(AppError::AuthErr(NotManager))` - Requester does not manage the team
    /// - `Err(AppError::RosterErr(_))` - Duplicate request, already rostered, guest target,
    ///   or the user is not accepting requests
    pub async fn request_from_team(
        &self,
        manager_id: Uuid,
        team_id: Uuid,
        user_id: Uuid,
    ) -> Result<RosterRequest, AppError> {
        ValidatorChain::new(self.db)
            .user_is_manager(manager_id, team_id)
            .user_exists(user_id)
            .no_pending_request(user_id, team_id)
            .user_not_on_team(user_id, team_id)
            .user_is_not_guest(user_id)
            .user_accepting_requests(user_id)
            .test()
            .await?;

        self.create(team_id, user_id, RequestSource::Team).await
    }

    /// A user asks to join a team with an open roster.
    pub async fn request_from_player(
        &self,
        user_id: Uuid,
        team_id: Uuid,
    ) -> Result<RosterRequest, AppError> {
        ValidatorChain::new(self.db)
            .user_exists(user_id)
            .team_exists(team_id)
            .user_is_not_guest(user_id)
            .no_pending_request(user_id, team_id)
            .user_not_on_team(user_id, team_id)
            .team_accepting_requests(team_id)
            .test()
            .await?;

        self.create(team_id, user_id, RequestSource::Player).await
    }

    /// Creates the record, then appends its id to the team's queue and the user's queue.
    async fn create(
        &self,
        team_id: Uuid,
        user_id: Uuid,
        source: RequestSource,
    ) -> Result<RosterRequest, AppError> {
        let request = RosterRequestRepository::new(self.db)
            .create(team_id, user_id, source)
            .await?;

        let mut team = lookup::team(self.db, team_id).await?;
        team.requests.push_unique(request.id);
        TeamRepository::new(self.db).save(team).await?;

        let mut user = lookup::user(self.db, user_id).await?;
        user.requests.push_unique(request.id);
        UserRepository::new(self.db).save(user).await?;

        tracing::debug!(
            "Created {:?} roster request {} for user {} on team {}",
            source,
            request.id,
            user_id,
            team_id
        );

        Ok(request)
    }

    /// A manager answers a request the player created.
    ///
    /// Approval rosters the player on both sides. Either way the request leaves the
    /// team's queue and stays in the player's.
    ///
    /// # Returns
    /// - `Ok(RosterRequest)` - The resolved request
    /// - `Err(AppError::RosterErr(NotAllowedToRespond))` - The team created the request
    /// - `Err(AppError::RosterErr(RequestAlreadyResolved))` - Request is not pending
    /// - `Err(AppError::AuthErr(NotManager))` - Responder does not manage the team
    pub async fn team_respond(
        &self,
        manager_id: Uuid,
        request_id: Uuid,
        approve: bool,
    ) -> Result<RosterRequest, AppError> {
        let request = lookup::roster_request(self.db, request_id).await?;

        let mut chain = ValidatorChain::new(self.db)
            .request_is_user_initiated(request_id)
            .request_is_pending(request_id)
            .user_is_manager(manager_id, request.team_id);
        if approve {
            chain = chain.user_not_on_team(request.user_id, request.team_id);
        }
        chain.test().await?;

        let resolved = self.resolve(&request, approve).await?;

        let mut team = lookup::team(self.db, request.team_id).await?;
        team.requests.remove(request_id);
        TeamRepository::new(self.db).save(team).await?;

        Ok(resolved)
    }

    /// A user answers a team's invitation.
    ///
    /// Approval rosters the user on both sides. Either way the request leaves the
    /// user's queue and stays in the team's.
    pub async fn user_respond(
        &self,
        user_id: Uuid,
        request_id: Uuid,
        approve: bool,
    ) -> Result<RosterRequest, AppError> {
        let request = lookup::roster_request(self.db, request_id).await?;

        let mut chain = ValidatorChain::new(self.db)
            .request_is_team_initiated(request_id)
            .request_is_pending(request_id)
            .user_on_request(user_id, request_id);
        if approve {
            chain = chain.user_not_on_team(request.user_id, request.team_id);
        }
        chain.test().await?;

        let resolved = self.resolve(&request, approve).await?;

        let mut user = lookup::user(self.db, user_id).await?;
        user.requests.remove(request_id);
        UserRepository::new(self.db).save(user).await?;

        Ok(resolved)
    }

    /// Applies the membership change for an approval and records the new status.
    async fn resolve(
        &self,
        request: &RosterRequest,
        approve: bool,
    ) -> Result<RosterRequest, AppError> {
        let status = if approve {
            let team = lookup::team(self.db, request.team_id).await?;
            let user = lookup::user(self.db, request.user_id).await?;
            membership::add_player(self.db, team, user).await?;
            RequestStatus::Approved
        } else {
            RequestStatus::Denied
        };

        RosterRequestRepository::new(self.db)
            .update_status(request.id, status)
            .await?
            .ok_or_else(|| RosterError::RequestNotFound(request.id).into())
    }

    /// A manager withdraws or discards a request held in the team's queue.
    ///
    /// # Returns
    /// - `Ok(())` - Request removed from both queues and deleted
    /// - `Err(AppError::RosterErr(RequestNotInList))` - The team's queue does not hold it
    pub async fn team_delete(&self, manager_id: Uuid, request_id: Uuid) -> Result<(), AppError> {
        let request = lookup::roster_request(self.db, request_id).await?;

        ValidatorChain::new(self.db)
            .user_is_manager(manager_id, request.team_id)
            .team_contains_request(request.team_id, request_id)
            .test()
            .await?;

        self.delete(&request).await
    }

    /// A user withdraws or discards a request held in their own queue.
    pub async fn user_delete(&self, user_id: Uuid, request_id: Uuid) -> Result<(), AppError> {
        let request = lookup::roster_request(self.db, request_id).await?;

        ValidatorChain::new(self.db)
            .user_on_request(user_id, request_id)
            .user_contains_request(user_id, request_id)
            .test()
            .await?;

        self.delete(&request).await
    }

    /// Removes the id from both queues, tolerating a party that no longer exists, then
    /// deletes the record.
    async fn delete(&self, request: &RosterRequest) -> Result<(), AppError> {
        let teams = TeamRepository::new(self.db);
        if let Some(mut team) = teams.find_by_id(request.team_id).await? {
            if team.requests.remove(request.id) {
                teams.save(team).await?;
            }
        }

        let users = UserRepository::new(self.db);
        if let Some(mut user) = users.find_by_id(request.user_id).await? {
            if user.requests.remove(request.id) {
                users.save(user).await?;
            }
        }

        RosterRequestRepository::new(self.db)
            .delete(request.id)
            .await?;

        Ok(())
    }

    /// Gets one request for its user or a manager of its team.
    pub async fn get(
        &self,
        user_id: Uuid,
        request_id: Uuid,
    ) -> Result<RosterRequestDetail, AppError> {
        ValidatorChain::new(self.db)
            .user_authorized_for_request(user_id, request_id)
            .test()
            .await?;

        let request = lookup::roster_request(self.db, request_id).await?;
        self.detail(request).await
    }

    /// Gets the requests in a team's queue, for one of its managers.
    pub async fn get_by_team(
        &self,
        manager_id: Uuid,
        team_id: Uuid,
    ) -> Result<Vec<RosterRequestDetail>, AppError> {
        ValidatorChain::new(self.db)
            .user_is_manager(manager_id, team_id)
            .test()
            .await?;

        let team = lookup::team(self.db, team_id).await?;
        let requests = RosterRequestRepository::new(self.db)
            .find_by_ids(&team.requests.0)
            .await?;

        self.details(requests).await
    }

    /// Gets the requests in a user's own queue.
    pub async fn get_by_user(&self, user_id: Uuid) -> Result<Vec<RosterRequestDetail>, AppError> {
        let user = lookup::user(self.db, user_id).await?;
        let requests = RosterRequestRepository::new(self.db)
            .find_by_ids(&user.requests.0)
            .await?;

        self.details(requests).await
    }

    async fn detail(&self, request: RosterRequest) -> Result<RosterRequestDetail, AppError> {
        let team = TeamRepository::new(self.db)
            .find_by_id(request.team_id)
            .await?;
        let user = UserRepository::new(self.db)
            .find_by_id(request.user_id)
            .await?;

        Ok(RosterRequestDetail { request, team, user })
    }

    async fn details(
        &self,
        requests: Vec<RosterRequest>,
    ) -> Result<Vec<RosterRequestDetail>, AppError> {
        let mut details = Vec::with_capacity(requests.len());
        for request in requests {
            details.push(self.detail(request).await?);
        }

        Ok(details)
    }
}
