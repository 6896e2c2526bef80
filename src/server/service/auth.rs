//! Credential checks and password recovery.
//!
//! Session handling is done by the controller layer; this service only decides whether
//! a set of credentials identifies a user.

use chrono::{Duration, Utc};
use entity::sea_orm_active_enums::OtpReason;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, roster::RosterError, AppError},
    model::{passcode::CreatePasscodeParam, user::User},
    service::{mailer::Mailer, passcode::PasscodeService},
    util::credentials,
    validator::ValidatorChain,
};

/// Lifetime of a password recovery code.
const RECOVERY_TTL_HOURS: i64 = 1;

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Authenticates by email or username and password.
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials are valid
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Unknown identifier, guest
    ///   account, or wrong password
    pub async fn login(&self, identifier: &str, password: &str) -> Result<User, AppError> {
        let user = UserRepository::new(self.db)
            .find_by_identifier(identifier.trim())
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if user.guest || !credentials::verify_password(password, &user.password) {
            return Err(AuthError::InvalidCredentials.into());
        }

        tracing::debug!("User {} logged in", user.id);

        Ok(user)
    }

    /// Confirms the user manages the team on both sides of the relationship.
    pub async fn authorize_manager(&self, user_id: Uuid, team_id: Uuid) -> Result<(), AppError> {
        ValidatorChain::new(self.db)
            .user_is_manager(user_id, team_id)
            .test()
            .await
    }

    /// Issues a recovery code for a real account and hands it to the mailer.
    ///
    /// Unknown emails and guest accounts succeed without sending anything so the
    /// response does not reveal which emails are registered.
    pub async fn request_password_recovery(
        &self,
        mailer: &dyn Mailer,
        email: &str,
    ) -> Result<(), AppError> {
        let Some(user) = UserRepository::new(self.db)
            .find_by_email(email.trim())
            .await?
        else {
            return Ok(());
        };
        if user.guest {
            return Ok(());
        }

        let passcode = PasscodeService::new(self.db)
            .create(CreatePasscodeParam {
                creator_id: user.id,
                reason: OtpReason::PasswordRecovery,
                team_id: None,
                expires_at: Utc::now() + Duration::hours(RECOVERY_TTL_HOURS),
            })
            .await?;

        mailer
            .send_password_recovery(&user.email, &passcode.code)
            .await
    }

    /// Sets a new password using a recovery code issued to that email.
    ///
    /// # Returns
    /// - `Ok(())` - Password changed and the code consumed
    /// - `Err(AppError::RosterErr(InvalidPasscode))` - Code unknown, expired, or issued
    ///   to another user
    /// - `Err(AppError::RosterErr(WeakPassword))` - New password fails the policy
    pub async fn reset_password(
        &self,
        email: &str,
        code: &str,
        new_password: &str,
    ) -> Result<(), AppError> {
        let users = UserRepository::new(self.db);
        let passcodes = PasscodeService::new(self.db);

        let user = users
            .find_by_email(email.trim())
            .await?
            .ok_or(RosterError::InvalidPasscode)?;
        let passcode = passcodes
            .find_valid(code, OtpReason::PasswordRecovery, Utc::now())
            .await?
            .filter(|p| p.creator_id == user.id)
            .ok_or(RosterError::InvalidPasscode)?;

        credentials::validate_password(new_password)?;

        let mut user = user;
        user.password = credentials::hash_password(new_password)?;
        users.save(user).await?;
        passcodes.delete(passcode.id).await?;

        Ok(())
    }
}
