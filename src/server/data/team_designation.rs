//! Team designation data repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::model::designation::TeamDesignation;

pub struct TeamDesignationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeamDesignationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        name: String,
        description: String,
    ) -> Result<TeamDesignation, DbErr> {
        let entity = entity::team_designation::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(name),
            description: ActiveValue::Set(description),
        }
        .insert(self.db)
        .await?;

        Ok(TeamDesignation::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<TeamDesignation>, DbErr> {
        let entity = entity::prelude::TeamDesignation::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(TeamDesignation::from_entity))
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<TeamDesignation>, DbErr> {
        let entity = entity::prelude::TeamDesignation::find()
            .filter(entity::team_designation::Column::Name.eq(name))
            .one(self.db)
            .await?;

        Ok(entity.map(TeamDesignation::from_entity))
    }

    /// Gets all designations ordered by name.
    pub async fn get_all(&self) -> Result<Vec<TeamDesignation>, DbErr> {
        let entities = entity::prelude::TeamDesignation::find()
            .order_by_asc(entity::team_designation::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(TeamDesignation::from_entity)
            .collect())
    }
}
