use std::collections::HashSet;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_GUEST_EMAIL_DOMAIN: &str = "guest.invalid";

pub struct Config {
    pub database_url: String,
    pub bind_address: String,

    pub admin_emails: AdminAllowList,
    pub guest_email_domain: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let guest_email_domain = std::env::var("GUEST_EMAIL_DOMAIN")
            .unwrap_or_else(|_| DEFAULT_GUEST_EMAIL_DOMAIN.to_string());
        if guest_email_domain.is_empty() || guest_email_domain.contains('@') {
            return Err(ConfigError::InvalidEnvVar {
                name: "GUEST_EMAIL_DOMAIN".to_string(),
                reason: "must be a bare domain".to_string(),
            }
            .into());
        }

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
            admin_emails: AdminAllowList::from_csv(
                &std::env::var("ADMIN_EMAILS").unwrap_or_default(),
            ),
            guest_email_domain,
        })
    }
}

/// Email addresses allowed to perform administrator actions.
///
/// Matching is case-insensitive. An empty list means nobody is an administrator.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AdminAllowList(HashSet<String>);

impl AdminAllowList {
    pub fn new<I, S>(emails: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            emails
                .into_iter()
                .map(|email| email.as_ref().trim().to_lowercase())
                .filter(|email| !email.is_empty())
                .collect(),
        )
    }

    /// Parses a comma separated list, ignoring blank entries.
    pub fn from_csv(value: &str) -> Self {
        Self::new(value.split(','))
    }

    pub fn contains(&self, email: &str) -> bool {
        self.0.contains(&email.trim().to_lowercase())
    }
}
