use chrono::{Duration, Utc};
use entity::{embedded::TeamSnapshots, sea_orm_active_enums::OtpReason};
use uuid::Uuid;
use validator::Validate;

use crate::server::{
    data::{team::TeamRepository, user::UserRepository},
    error::{roster::RosterError, AppError},
    model::{
        passcode::{CreatePasscodeParam, OneTimePasscode},
        team::{AddGuestParam, Team},
        user::{CreateUserParam, User},
    },
    service::{membership, passcode::PasscodeService, team::TeamService},
    util::credentials,
    validator::{lookup, ValidatorChain},
};

/// Lifetime of a bulk team join code.
const JOIN_CODE_TTL_HOURS: i64 = 24;

impl<'a> TeamService<'a> {
    /// A manager removes a player from the roster.
    ///
    /// # Returns
    /// - `Ok(Team)` - The team without the player
    /// - `Err(AppError::RosterErr(PlayerNotOnTeam))` - Target is not rostered on both sides
    /// - `Err(AppError::AuthErr(NotManager))` - Requester does not manage the team
    pub async fn remove_player(
        &self,
        manager_id: Uuid,
        team_id: Uuid,
        user_id: Uuid,
    ) -> Result<Team, AppError> {
        ValidatorChain::new(self.db)
            .user_on_team(user_id, team_id)
            .user_is_manager(manager_id, team_id)
            .test()
            .await?;

        let team = lookup::team(self.db, team_id).await?;
        let user = lookup::user(self.db, user_id).await?;
        let (team, _) = membership::remove_player(self.db, team, user).await?;

        Ok(team)
    }

    /// A player takes themselves off the roster.
    pub async fn leave(&self, user_id: Uuid, team_id: Uuid) -> Result<User, AppError> {
        ValidatorChain::new(self.db)
            .user_on_team(user_id, team_id)
            .test()
            .await?;

        let team = lookup::team(self.db, team_id).await?;
        let user = lookup::user(self.db, user_id).await?;
        let (_, user) = membership::remove_player(self.db, team, user).await?;

        Ok(user)
    }

    /// A manager grants manager rights to another real account.
    ///
    /// # Returns
    /// - `Ok(Team)` - The team with the new manager
    /// - `Err(AppError::RosterErr(AlreadyManages))` - Candidate already manages the team
    /// - `Err(AppError::RosterErr(NotAcceptingRequests))` - Candidate is closed to requests
    pub async fn add_manager(
        &self,
        manager_id: Uuid,
        team_id: Uuid,
        candidate_id: Uuid,
    ) -> Result<Team, AppError> {
        ValidatorChain::new(self.db)
            .user_is_manager(manager_id, team_id)
            .user_exists(candidate_id)
            .user_is_not_manager(candidate_id, team_id)
            .user_is_not_guest(candidate_id)
            .user_accepting_requests(candidate_id)
            .test()
            .await?;

        let team = lookup::team(self.db, team_id).await?;
        let candidate = lookup::user(self.db, candidate_id).await?;
        let (team, _) = membership::add_manager(self.db, team, candidate).await?;

        tracing::info!(
            "User {} added {} as a manager of team {}",
            manager_id,
            candidate_id,
            team_id
        );

        Ok(team)
    }

    /// A manager removes a manager, possibly themselves.
    ///
    /// The last manager of a team cannot be removed.
    pub async fn remove_manager(
        &self,
        manager_id: Uuid,
        team_id: Uuid,
        target_id: Uuid,
    ) -> Result<Team, AppError> {
        ValidatorChain::new(self.db)
            .user_is_manager(manager_id, team_id)
            .user_is_manager(target_id, team_id)
            .team_has_other_managers(team_id)
            .test()
            .await?;

        let team = lookup::team(self.db, team_id).await?;
        let target = lookup::user(self.db, target_id).await?;
        let (team, _) = membership::remove_manager(self.db, team, target).await?;

        Ok(team)
    }

    /// Issues a multi-use join code for the team, valid for a day.
    pub async fn create_bulk_join_code(
        &self,
        manager_id: Uuid,
        team_id: Uuid,
    ) -> Result<OneTimePasscode, AppError> {
        ValidatorChain::new(self.db)
            .user_is_manager(manager_id, team_id)
            .test()
            .await?;

        PasscodeService::new(self.db)
            .create(CreatePasscodeParam {
                creator_id: manager_id,
                reason: OtpReason::TeamJoin,
                team_id: Some(team_id),
                expires_at: Utc::now() + Duration::hours(JOIN_CODE_TTL_HOURS),
            })
            .await
    }

    /// Joins the team a bulk join code was issued for.
    ///
    /// The code is not consumed; it stays usable until it expires.
    ///
    /// # Returns
    /// - `Ok(Team)` - The team with the user rostered
    /// - `Err(AppError::RosterErr(InvalidPasscode))` - Unknown or expired code
    /// - `Err(AppError::RosterErr(PlayerAlreadyRostered))` - User is already on the team
    pub async fn join_with_code(&self, user_id: Uuid, code: &str) -> Result<Team, AppError> {
        let team_id = PasscodeService::new(self.db)
            .find_valid(code, OtpReason::TeamJoin, Utc::now())
            .await?
            .and_then(|passcode| passcode.team_id)
            .ok_or(RosterError::InvalidPasscode)?;

        ValidatorChain::new(self.db)
            .user_exists(user_id)
            .team_exists(team_id)
            .user_is_not_guest(user_id)
            .user_not_on_team(user_id, team_id)
            .test()
            .await?;

        let team = lookup::team(self.db, team_id).await?;
        let user = lookup::user(self.db, user_id).await?;
        let (team, _) = membership::add_player(self.db, team, user).await?;

        Ok(team)
    }

    /// Creates a guest placeholder account already rostered on the team.
    ///
    /// The guest gets a generated `guest{millis}` username, an email on the configured
    /// guest domain and a random password nobody is told.
    pub async fn add_guest(&self, param: AddGuestParam) -> Result<(Team, User), AppError> {
        let param = param.normalized();
        param.validate().map_err(RosterError::from)?;

        ValidatorChain::new(self.db)
            .user_is_manager(param.manager_id, param.team_id)
            .test()
            .await?;

        let users = UserRepository::new(self.db);
        let username = self.free_guest_username(&users).await?;
        let password_hash = credentials::hash_password(&credentials::generate_password())?;

        let mut team = lookup::team(self.db, param.team_id).await?;
        let guest = users
            .create(CreateUserParam {
                email: format!("{}@{}", username, param.email_domain),
                username,
                password_hash,
                first_name: param.first_name,
                last_name: param.last_name,
                guest: true,
                player_teams: TeamSnapshots(vec![team.snapshot()]),
            })
            .await?;

        team.players.push_unique(guest.snapshot());
        let team = TeamRepository::new(self.db).save(team).await?;

        tracing::info!("Added guest {} to team {}", guest.id, team.id);

        Ok((team, guest))
    }

    async fn free_guest_username(&self, users: &UserRepository<'_>) -> Result<String, AppError> {
        let mut stamp = Utc::now().timestamp_millis();
        loop {
            let username = format!("guest{}", stamp);
            if users.find_by_username(&username).await?.is_none() {
                return Ok(username);
            }
            stamp += 1;
        }
    }
}
