//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user documents. It handles
//! creation, lookups by id, email and username, full-row saves of the denormalized
//! membership caches, and prefix text search, converting between entity models and
//! domain models at the infrastructure boundary.

use chrono::Utc;
use entity::embedded::{IdList, TeamSnapshots};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};
use uuid::Uuid;

use crate::server::{
    data::prefix_condition,
    model::user::{CreateUserParam, User},
};

/// Repository providing database operations for user documents.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user with empty caches apart from the optional initial `player_teams`.
    ///
    /// New accounts are public; real accounts are open to requests and guests are not.
    ///
    /// # Arguments
    /// - `param` - Identity fields and pre-hashed password
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including unique violations on email or username
    pub async fn create(&self, param: CreateUserParam) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            email: ActiveValue::Set(param.email),
            username: ActiveValue::Set(param.username),
            password: ActiveValue::Set(param.password_hash),
            first_name: ActiveValue::Set(param.first_name),
            last_name: ActiveValue::Set(param.last_name),
            private: ActiveValue::Set(false),
            open_to_requests: ActiveValue::Set(!param.guest),
            guest: ActiveValue::Set(param.guest),
            player_teams: ActiveValue::Set(param.player_teams),
            manager_teams: ActiveValue::Set(TeamSnapshots::default()),
            archive_teams: ActiveValue::Set(TeamSnapshots::default()),
            requests: ActiveValue::Set(IdList::default()),
            stats: ActiveValue::Set(IdList::default()),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by id.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email.to_lowercase()))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user whose email (compared lowercased) or username equals `identifier`.
    pub async fn find_by_identifier(&self, identifier: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(
                Condition::any()
                    .add(entity::user::Column::Email.eq(identifier.to_lowercase()))
                    .add(entity::user::Column::Username.eq(identifier)),
            )
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Writes every field of the user back to its row.
    ///
    /// # Returns
    /// - `Ok(User)` - The user as persisted
    /// - `Err(DbErr)` - Database error, or `RecordNotUpdated` if the row no longer exists
    pub async fn save(&self, user: User) -> Result<User, DbErr> {
        let entity = user.into_active_model().update(self.db).await?;

        Ok(User::from_entity(entity))
    }

    /// Deletes a user by id. Deleting a missing user is not an error.
    pub async fn delete(&self, id: Uuid) -> Result<(), DbErr> {
        entity::prelude::User::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }

    /// Searches non-guest users by word prefix over username, first name and last name.
    ///
    /// Each token contributes one OR clause per column; an empty token list matches nothing.
    ///
    /// # Arguments
    /// - `tokens` - Search tokens, already filtered to the minimum length
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - Matching users in store order
    /// - `Err(DbErr)` - Database error during query
    pub async fn search(&self, tokens: &[String]) -> Result<Vec<User>, DbErr> {
        if tokens.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::User::find()
            .filter(prefix_condition(
                tokens,
                &[
                    entity::user::Column::Username,
                    entity::user::Column::FirstName,
                    entity::user::Column::LastName,
                ],
            ))
            .filter(entity::user::Column::Guest.eq(false))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }
}
