//! Account management.
//!
//! Every change to a name or username is copied into the `UserSnapshot` held by each
//! live team the user manages or plays on.

use sea_orm::DatabaseConnection;
use uuid::Uuid;
use validator::Validate;

use crate::server::{
    data::{team::TeamRepository, user::UserRepository},
    error::{auth::AuthError, roster::RosterError, AppError},
    model::user::{CreateUserParam, SignupParam, UpdateProfileParam, User},
    service::membership::{self, QueueOwner},
    util::{
        credentials,
        search::{edit_distance, rank_by, search_tokens, should_rank},
    },
    validator::{lookup, ValidatorChain},
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new account.
    ///
    /// # Returns
    /// - `Ok(User)` - The created account
    /// - `Err(AppError::RosterErr(MissingField | InvalidEmail | InvalidUsername | WeakPassword))` -
    ///   Input fails validation
    /// - `Err(AppError::RosterErr(EmailTaken | UsernameTaken))` - Already registered
    pub async fn signup(&self, param: SignupParam) -> Result<User, AppError> {
        let param = param.normalized();
        param.validate().map_err(RosterError::from)?;
        let SignupParam {
            email,
            username,
            password,
            first_name,
            last_name,
        } = param;

        let repo = UserRepository::new(self.db);
        if repo.find_by_email(&email).await?.is_some() {
            return Err(RosterError::EmailTaken.into());
        }
        if repo.find_by_username(&username).await?.is_some() {
            return Err(RosterError::UsernameTaken.into());
        }

        let user = repo
            .create(CreateUserParam {
                email,
                username,
                password_hash: credentials::hash_password(&password)?,
                first_name,
                last_name,
                guest: false,
                player_teams: Default::default(),
            })
            .await?;

        tracing::info!("New account {} ({})", user.id, user.username);

        Ok(user)
    }

    pub async fn get(&self, user_id: Uuid) -> Result<User, AppError> {
        lookup::user(self.db, user_id).await
    }

    /// Applies the provided profile changes and refreshes team caches when names change.
    pub async fn update_profile(
        &self,
        user_id: Uuid,
        param: UpdateProfileParam,
    ) -> Result<User, AppError> {
        let param = param.normalized();
        param.validate().map_err(RosterError::from)?;

        let mut user = lookup::user(self.db, user_id).await?;
        let before = user.snapshot();

        if let Some(first_name) = param.first_name {
            user.first_name = first_name;
        }
        if let Some(last_name) = param.last_name {
            user.last_name = last_name;
        }
        if let Some(private) = param.private {
            user.private = private;
        }
        if let Some(open) = param.open_to_requests {
            user.open_to_requests = open;
        }

        let user = UserRepository::new(self.db).save(user).await?;
        if user.snapshot() != before {
            membership::refresh_user_snapshot(self.db, &user).await?;
        }

        Ok(user)
    }

    pub async fn change_username(&self, user_id: Uuid, username: &str) -> Result<User, AppError> {
        let username = username.trim();
        credentials::validate_username(username)?;

        let repo = UserRepository::new(self.db);
        let mut user = lookup::user(self.db, user_id).await?;
        if user.username == username {
            return Ok(user);
        }
        if repo.find_by_username(username).await?.is_some() {
            return Err(RosterError::UsernameTaken.into());
        }

        user.username = username.to_string();
        let user = repo.save(user).await?;
        membership::refresh_user_snapshot(self.db, &user).await?;

        Ok(user)
    }

    /// Replaces the password after checking the current one.
    ///
    /// # Returns
    /// - `Ok(())` - Password changed
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Current password is wrong
    /// - `Err(AppError::RosterErr(WeakPassword))` - New password fails the policy
    pub async fn change_password(
        &self,
        user_id: Uuid,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), AppError> {
        let mut user = lookup::user(self.db, user_id).await?;
        if !credentials::verify_password(current_password, &user.password) {
            return Err(AuthError::InvalidCredentials.into());
        }
        credentials::validate_password(new_password)?;

        user.password = credentials::hash_password(new_password)?;
        UserRepository::new(self.db).save(user).await?;

        Ok(())
    }

    /// Deletes a real account after removing it from every team and request queue.
    ///
    /// # Returns
    /// - `Ok(())` - Account deleted
    /// - `Err(AppError::RosterErr(GuestAccount))` - Guests are only removed by a claim
    /// - `Err(AppError::RosterErr(OnlyManagerCannotLeave))` - The user is the last
    ///   manager of a live team
    pub async fn delete_account(&self, user_id: Uuid) -> Result<(), AppError> {
        ValidatorChain::new(self.db)
            .user_exists(user_id)
            .user_is_not_guest(user_id)
            .test()
            .await?;

        let user = lookup::user(self.db, user_id).await?;
        let teams = TeamRepository::new(self.db);

        for team_id in user.manager_teams.ids() {
            if let Some(team) = teams.find_by_id(team_id).await? {
                if team.managers.contains(user_id) && team.managers.len() <= 1 {
                    return Err(RosterError::OnlyManagerCannotLeave.into());
                }
            }
        }

        let mut team_ids = user.manager_teams.ids();
        team_ids.extend(user.player_teams.ids());
        team_ids.sort();
        team_ids.dedup();

        for team_id in team_ids {
            let Some(mut team) = teams.find_by_id(team_id).await? else {
                continue;
            };

            let managed = team.managers.remove(user_id);
            let played = team.players.remove(user_id);
            if managed || played {
                teams.save(team).await?;
            }
        }

        membership::purge_requests(self.db, &user.requests.0, QueueOwner::User).await?;
        UserRepository::new(self.db).delete(user_id).await?;

        tracing::info!("Deleted account {}", user_id);

        Ok(())
    }

    /// Searches real accounts by username and name.
    ///
    /// Multi-word terms with more than one hit are ordered by the distance of the term
    /// to the full name plus its distance to the username.
    pub async fn search(&self, term: &str) -> Result<Vec<User>, AppError> {
        ValidatorChain::new(self.db)
            .enough_search_characters(term)
            .test()
            .await?;

        let term = term.trim();
        let users = UserRepository::new(self.db)
            .search(&search_tokens(term))
            .await?;

        if !should_rank(term, users.len()) {
            return Ok(users);
        }

        Ok(rank_by(users, |user| {
            edit_distance(term, &user.full_name()) + edit_distance(term, &user.username)
        }))
    }
}
