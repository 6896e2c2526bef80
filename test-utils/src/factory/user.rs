//! User factory for creating test user entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::embedded::{IdList, TeamSnapshots};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let user = UserFactory::new(&db)
///     .username("closedplayer")
///     .open_to_requests(false)
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    username: String,
    email: String,
    first_name: String,
    last_name: String,
    private: bool,
    open_to_requests: bool,
    guest: bool,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - username: `"user{n}"`, email: `"user{n}@example.com"`
    /// - first/last name: `"First{n}"` / `"Last{n}"`
    /// - open to requests, public, not a guest
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            username: format!("user{}", id),
            email: format!("user{}@example.com", id),
            first_name: format!("First{}", id),
            last_name: format!("Last{}", id),
            private: false,
            open_to_requests: true,
            guest: false,
        }
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    pub fn private(mut self, private: bool) -> Self {
        self.private = private;
        self
    }

    pub fn open_to_requests(mut self, open: bool) -> Self {
        self.open_to_requests = open;
        self
    }

    pub fn guest(mut self, guest: bool) -> Self {
        self.guest = guest;
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            email: ActiveValue::Set(self.email),
            username: ActiveValue::Set(self.username),
            password: ActiveValue::Set("$argon2id$factory".to_string()),
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            private: ActiveValue::Set(self.private),
            open_to_requests: ActiveValue::Set(self.open_to_requests),
            guest: ActiveValue::Set(self.guest),
            player_teams: ActiveValue::Set(TeamSnapshots::default()),
            manager_teams: ActiveValue::Set(TeamSnapshots::default()),
            archive_teams: ActiveValue::Set(TeamSnapshots::default()),
            requests: ActiveValue::Set(IdList::default()),
            stats: ActiveValue::Set(IdList::default()),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
///
/// Shorthand for `UserFactory::new(db).build().await`.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates a guest placeholder user.
pub async fn create_guest(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).guest(true).build().await
}
