//! User domain models and parameters.
//!
//! A user carries its identity plus the denormalized membership caches
//! (`player_teams`, `manager_teams`, `archive_teams`) and the queue of pending roster
//! request ids it is party to.

use chrono::{DateTime, Utc};
use entity::embedded::{IdList, TeamSnapshots, UserSnapshot};
use sea_orm::ActiveValue;
use uuid::Uuid;
use validator::Validate;

use crate::{
    model::user::{SignupDto, UpdateProfileDto, UserDto, UserSummaryDto},
    server::util::credentials::{alphanumeric_username, password_classes},
};

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub username: String,
    /// Argon2 PHC string.
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub private: bool,
    pub open_to_requests: bool,
    /// Placeholder created by a manager; cannot log in.
    pub guest: bool,
    pub player_teams: TeamSnapshots,
    pub manager_teams: TeamSnapshots,
    pub archive_teams: TeamSnapshots,
    pub requests: IdList,
    pub stats: IdList,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            username: entity.username,
            password: entity.password,
            first_name: entity.first_name,
            last_name: entity.last_name,
            private: entity.private,
            open_to_requests: entity.open_to_requests,
            guest: entity.guest,
            player_teams: entity.player_teams,
            manager_teams: entity.manager_teams,
            archive_teams: entity.archive_teams,
            requests: entity.requests,
            stats: entity.stats,
            created_at: entity.created_at,
        }
    }

    /// Converts the domain model back into a fully-set active model for a full-row write.
    pub fn into_active_model(self) -> entity::user::ActiveModel {
        entity::user::ActiveModel {
            id: ActiveValue::Set(self.id),
            email: ActiveValue::Set(self.email),
            username: ActiveValue::Set(self.username),
            password: ActiveValue::Set(self.password),
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            private: ActiveValue::Set(self.private),
            open_to_requests: ActiveValue::Set(self.open_to_requests),
            guest: ActiveValue::Set(self.guest),
            player_teams: ActiveValue::Set(self.player_teams),
            manager_teams: ActiveValue::Set(self.manager_teams),
            archive_teams: ActiveValue::Set(self.archive_teams),
            requests: ActiveValue::Set(self.requests),
            stats: ActiveValue::Set(self.stats),
            created_at: ActiveValue::Set(self.created_at),
        }
    }

    /// The partial copy embedded in a team's `managers` / `players`.
    pub fn snapshot(&self) -> UserSnapshot {
        UserSnapshot {
            id: self.id,
            username: self.username.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            guest: self.guest,
        }
    }

    /// `"{first} {last}"`, used for search ranking.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Converts the user to a DTO.
    ///
    /// # Arguments
    /// - `public` - Strip `email` and `requests` for callers other than the user
    pub fn into_dto(self, public: bool) -> UserDto {
        UserDto {
            id: self.id,
            email: (!public).then_some(self.email),
            username: self.username,
            first_name: self.first_name,
            last_name: self.last_name,
            private: self.private,
            open_to_requests: self.open_to_requests,
            guest: self.guest,
            player_teams: self.player_teams.0,
            manager_teams: self.manager_teams.0,
            archive_teams: self.archive_teams.0,
            requests: (!public).then_some(self.requests.0),
            stats: self.stats.0,
        }
    }

    pub fn summary_dto(&self) -> UserSummaryDto {
        UserSummaryDto {
            id: self.id,
            username: self.username.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
        }
    }
}

/// Parameters for creating a user record; the password is already hashed.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub email: String,
    pub username: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub guest: bool,
    /// Initial `player_teams` cache, used when a guest is created onto a roster.
    pub player_teams: TeamSnapshots,
}

/// Parameters for account signup; the password is plain text.
#[derive(Debug, Clone, Validate)]
pub struct SignupParam {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 2, max = 20), custom(function = alphanumeric_username))]
    pub username: String,
    #[validate(length(min = 8), custom(function = password_classes))]
    pub password: String,
    #[validate(length(min = 1))]
    pub first_name: String,
    #[validate(length(min = 1))]
    pub last_name: String,
}

impl SignupParam {
    pub fn from_dto(dto: SignupDto) -> Self {
        Self {
            email: dto.email,
            username: dto.username,
            password: dto.password,
            first_name: dto.first_name,
            last_name: dto.last_name,
        }
    }

    /// Trims every field and lowercases the email. The password is kept verbatim.
    pub fn normalized(self) -> Self {
        Self {
            email: self.email.trim().to_lowercase(),
            username: self.username.trim().to_string(),
            password: self.password,
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
        }
    }
}

/// Optional profile changes; `None` leaves a field untouched.
#[derive(Debug, Clone, Default, Validate)]
pub struct UpdateProfileParam {
    #[validate(length(min = 1))]
    pub first_name: Option<String>,
    #[validate(length(min = 1))]
    pub last_name: Option<String>,
    pub private: Option<bool>,
    pub open_to_requests: Option<bool>,
}

impl UpdateProfileParam {
    pub fn from_dto(dto: UpdateProfileDto) -> Self {
        Self {
            first_name: dto.first_name,
            last_name: dto.last_name,
            private: dto.private,
            open_to_requests: dto.open_to_requests,
        }
    }

    pub fn normalized(self) -> Self {
        Self {
            first_name: self.first_name.map(|name| name.trim().to_string()),
            last_name: self.last_name.map(|name| name.trim().to_string()),
            ..self
        }
    }
}
