use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    config::AdminAllowList,
    error::{auth::AuthError, AppError},
    validator::{lookup, Check},
};

/// Passes when the user's email is on the configured allow-list.
pub struct UserIsAdmin<'a> {
    pub user_id: Uuid,
    pub admins: &'a AdminAllowList,
}

#[async_trait]
impl Check for UserIsAdmin<'_> {
    async fn check(&self, db: &DatabaseConnection) -> Result<(), AppError> {
        let user = lookup::user(db, self.user_id).await?;

        if !user.guest && self.admins.contains(&user.email) {
            Ok(())
        } else {
            Err(AuthError::UnauthorizedAdmin(self.user_id).into())
        }
    }
}
