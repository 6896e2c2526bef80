//! Team verification.
//!
//! Managers ask for their team to be verified and an administrator from the configured
//! allow-list approves or denies the request.

use entity::sea_orm_active_enums::RequestStatus;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    config::AdminAllowList,
    data::{team::TeamRepository, verification_request::VerificationRequestRepository},
    error::{roster::RosterError, AppError},
    model::verification::VerificationRequest,
    service::membership,
    validator::{lookup, ValidatorChain},
};

pub struct VerificationService<'a> {
    db: &'a DatabaseConnection,
    admins: &'a AdminAllowList,
}

impl<'a> VerificationService<'a> {
    pub fn new(db: &'a DatabaseConnection, admins: &'a AdminAllowList) -> Self {
        Self { db, admins }
    }

    /// A manager asks for the team to be verified.
    ///
    /// # Returns
    /// - `Ok(VerificationRequest)` - The pending request
    /// - `Err(AppError::RosterErr(VerificationAlreadyRequested))` - One is already pending
    pub async fn request(
        &self,
        manager_id: Uuid,
        team_id: Uuid,
    ) -> Result<VerificationRequest, AppError> {
        ValidatorChain::new(self.db)
            .user_is_manager(manager_id, team_id)
            .test()
            .await?;

        let repo = VerificationRequestRepository::new(self.db);
        if repo.find_pending_by_team(team_id).await?.is_some() {
            return Err(RosterError::VerificationAlreadyRequested.into());
        }

        Ok(repo.create(team_id, manager_id).await?)
    }

    /// Marks the team verified and refreshes the snapshot its members hold.
    pub async fn approve(
        &self,
        admin_id: Uuid,
        request_id: Uuid,
    ) -> Result<VerificationRequest, AppError> {
        let request = self.pending_for_admin(admin_id, request_id).await?;

        let mut team = lookup::team(self.db, request.team_id).await?;
        team.verified = true;
        let team = TeamRepository::new(self.db).save(team).await?;
        membership::refresh_team_snapshot(self.db, &team).await?;

        tracing::info!("Admin {} verified team {}", admin_id, team.id);

        self.set_status(request_id, RequestStatus::Approved).await
    }

    pub async fn deny(
        &self,
        admin_id: Uuid,
        request_id: Uuid,
    ) -> Result<VerificationRequest, AppError> {
        self.pending_for_admin(admin_id, request_id).await?;

        self.set_status(request_id, RequestStatus::Denied).await
    }

    pub async fn list_pending(&self, admin_id: Uuid) -> Result<Vec<VerificationRequest>, AppError> {
        ValidatorChain::new(self.db)
            .user_is_admin(admin_id, self.admins)
            .test()
            .await?;

        Ok(VerificationRequestRepository::new(self.db)
            .get_pending()
            .await?)
    }

    async fn pending_for_admin(
        &self,
        admin_id: Uuid,
        request_id: Uuid,
    ) -> Result<VerificationRequest, AppError> {
        ValidatorChain::new(self.db)
            .user_is_admin(admin_id, self.admins)
            .test()
            .await?;

        let request = lookup::verification(self.db, request_id).await?;
        if request.status != RequestStatus::Pending {
            return Err(RosterError::RequestAlreadyResolved.into());
        }

        Ok(request)
    }

    async fn set_status(
        &self,
        request_id: Uuid,
        status: RequestStatus,
    ) -> Result<VerificationRequest, AppError> {
        VerificationRequestRepository::new(self.db)
            .update_status(request_id, status)
            .await?
            .ok_or_else(|| RosterError::VerificationNotFound(request_id).into())
    }
}
