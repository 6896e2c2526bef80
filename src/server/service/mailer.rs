//! Outbound email delivery.
//!
//! Delivery itself is outside this application; services hand messages to a
//! [`Mailer`]. The default [`LogMailer`] writes them to the log.

use async_trait::async_trait;

use crate::server::error::AppError;

#[async_trait]
pub trait Mailer: Send + Sync {
    /// Sends a password recovery code to `email`.
    async fn send_password_recovery(&self, email: &str, code: &str) -> Result<(), AppError>;
}

/// Mailer that logs messages instead of sending them.
#[derive(Clone, Debug, Default)]
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send_password_recovery(&self, email: &str, code: &str) -> Result<(), AppError> {
        tracing::info!("Password recovery code for {}: {}", email, code);

        Ok(())
    }
}
