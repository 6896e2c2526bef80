use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    config::AdminAllowList,
    data::team_designation::TeamDesignationRepository,
    error::{roster::RosterError, AppError},
    model::designation::TeamDesignation,
    validator::{lookup, ValidatorChain},
};

/// Reference list of team designations, editable by administrators.
pub struct DesignationService<'a> {
    db: &'a DatabaseConnection,
    admins: &'a AdminAllowList,
}

impl<'a> DesignationService<'a> {
    pub fn new(db: &'a DatabaseConnection, admins: &'a AdminAllowList) -> Self {
        Self { db, admins }
    }

    /// # Returns
    /// - `Ok(TeamDesignation)` - The new designation
    /// - `Err(AppError::AuthErr(UnauthorizedAdmin))` - Caller is not an administrator
    /// - `Err(AppError::RosterErr(DesignationTaken))` - Name already used
    pub async fn create(
        &self,
        admin_id: Uuid,
        name: &str,
        description: &str,
    ) -> Result<TeamDesignation, AppError> {
        ValidatorChain::new(self.db)
            .user_is_admin(admin_id, self.admins)
            .test()
            .await?;

        let name = name.trim();
        if name.is_empty() {
            return Err(RosterError::MissingField("name").into());
        }

        let repo = TeamDesignationRepository::new(self.db);
        if repo.find_by_name(name).await?.is_some() {
            return Err(RosterError::DesignationTaken.into());
        }

        Ok(repo
            .create(name.to_string(), description.trim().to_string())
            .await?)
    }

    pub async fn list(&self) -> Result<Vec<TeamDesignation>, AppError> {
        Ok(TeamDesignationRepository::new(self.db).get_all().await?)
    }

    pub async fn get(&self, id: Uuid) -> Result<TeamDesignation, AppError> {
        lookup::designation(self.db, id).await
    }
}
