//! Team data repository for database operations.
//!
//! Live teams only; archived seasons live in [`super::archive_team`]. Because a rollover
//! gives the live record a new id, `create` takes a fully formed domain model rather
//! than generating its own id.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
};
use uuid::Uuid;

use crate::server::{data::prefix_condition, model::team::Team};

pub struct TeamRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeamRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a team record with the id carried by the model.
    ///
    /// # Returns
    /// - `Ok(Team)` - The inserted team
    /// - `Err(DbErr)` - Database error, including a duplicate id or teamname
    pub async fn create(&self, team: Team) -> Result<Team, DbErr> {
        let entity = team.into_active_model().insert(self.db).await?;

        Ok(Team::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Team>, DbErr> {
        let entity = entity::prelude::Team::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Team::from_entity))
    }

    pub async fn find_by_teamname(&self, teamname: &str) -> Result<Option<Team>, DbErr> {
        let entity = entity::prelude::Team::find()
            .filter(entity::team::Column::Teamname.eq(teamname))
            .one(self.db)
            .await?;

        Ok(entity.map(Team::from_entity))
    }

    /// Writes every field of the team back to its row.
    pub async fn save(&self, team: Team) -> Result<Team, DbErr> {
        let entity = team.into_active_model().update(self.db).await?;

        Ok(Team::from_entity(entity))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), DbErr> {
        entity::prelude::Team::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }

    /// Searches live teams by word prefix over place, name and teamname.
    ///
    /// # Arguments
    /// - `tokens` - Search tokens, already filtered to the minimum length
    /// - `roster_open` - Exact filter on the roster flag when provided
    ///
    /// # Returns
    /// - `Ok(Vec<Team>)` - Matching teams in store order (empty when `tokens` is empty)
    /// - `Err(DbErr)` - Database error during query
    pub async fn search(
        &self,
        tokens: &[String],
        roster_open: Option<bool>,
    ) -> Result<Vec<Team>, DbErr> {
        if tokens.is_empty() {
            return Ok(Vec::new());
        }

        let mut query = entity::prelude::Team::find().filter(prefix_condition(
            tokens,
            &[
                entity::team::Column::Place,
                entity::team::Column::Name,
                entity::team::Column::Teamname,
            ],
        ));

        if let Some(open) = roster_open {
            query = query.filter(entity::team::Column::RosterOpen.eq(open));
        }

        let entities = query.all(self.db).await?;

        Ok(entities.into_iter().map(Team::from_entity).collect())
    }
}
