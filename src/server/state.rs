//! Application state shared across all request handlers.
//!
//! The state is built once during startup and cloned into every handler through
//! Axum's state extraction. Every field is cheap to clone: `DatabaseConnection` shares
//! its pool and the remaining resources sit behind `Arc`.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::{config::AdminAllowList, service::mailer::Mailer};

#[derive(Clone)]
pub struct AppState {
    /// Connection pool for the SQLite store.
    pub db: DatabaseConnection,

    /// Emails allowed to perform administrator actions.
    pub admins: Arc<AdminAllowList>,

    /// Outbound delivery for password recovery codes.
    pub mailer: Arc<dyn Mailer>,

    /// Domain used for the synthetic emails of guest accounts.
    pub guest_email_domain: String,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        admins: AdminAllowList,
        mailer: Arc<dyn Mailer>,
        guest_email_domain: String,
    ) -> Self {
        Self {
            db,
            admins: Arc::new(admins),
            mailer,
            guest_email_domain,
        }
    }
}
