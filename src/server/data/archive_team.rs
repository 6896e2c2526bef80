//! Archived season records.
//!
//! Archive rows are written once and never updated. `create` is idempotent on id so a
//! rollover or archive that is re-run after a partial failure does not fail on the
//! record it already wrote.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::model::team::ArchiveTeam;

pub struct ArchiveTeamRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ArchiveTeamRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts the archive record unless one with the same id already exists.
    ///
    /// # Returns
    /// - `Ok(ArchiveTeam)` - The stored record (the pre-existing one when already archived)
    /// - `Err(DbErr)` - Database error during lookup or insert
    pub async fn create(&self, archive: ArchiveTeam) -> Result<ArchiveTeam, DbErr> {
        if let Some(existing) = self.find_by_id(archive.id).await? {
            return Ok(existing);
        }

        let entity = archive.into_active_model().insert(self.db).await?;

        Ok(ArchiveTeam::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<ArchiveTeam>, DbErr> {
        let entity = entity::prelude::ArchiveTeam::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(ArchiveTeam::from_entity))
    }

    /// Gets every archived season of a lineage, oldest season first.
    pub async fn find_by_continuation_id(
        &self,
        continuation_id: Uuid,
    ) -> Result<Vec<ArchiveTeam>, DbErr> {
        let entities = entity::prelude::ArchiveTeam::find()
            .filter(entity::archive_team::Column::ContinuationId.eq(continuation_id))
            .order_by_asc(entity::archive_team::Column::SeasonNumber)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(ArchiveTeam::from_entity).collect())
    }
}
