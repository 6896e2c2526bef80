use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use uuid::Uuid;

use crate::model::api::ErrorDto;

/// Authentication and authorization failures.
#[derive(Error, Debug)]
pub enum AuthError {
    /// No user id is stored in the request session.
    #[error("Not logged in")]
    UserNotInSession,

    /// The session references a user that no longer exists.
    #[error("User {0} from session was not found in the database")]
    UserNotInDatabase(Uuid),

    /// Unknown identifier, wrong password, or an attempt to log in as a guest.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// The user is not a manager of the team, or the two sides of the manager
    /// relationship disagree.
    #[error("User {user_id} is not a manager of team {team_id}")]
    NotManager {
        /// User attempting the manager-only action
        user_id: Uuid,
        /// Team the action targets
        team_id: Uuid,
    },

    /// The user's email is not on the configured admin allow-list.
    #[error("User {0} is not an administrator")]
    UnauthorizedAdmin(Uuid),

    /// The user is neither the subject of the request nor a manager of its team.
    #[error("User {user_id} is not allowed to view request {request_id}")]
    NotAuthorizedForRequest {
        /// User attempting to read the request
        user_id: Uuid,
        /// Request being read
        request_id: Uuid,
    },
}

impl AuthError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::UserNotInDatabase(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::UNAUTHORIZED,
        }
    }
}

/// Converts authentication errors into HTTP responses.
///
/// Details such as user and team ids are logged at debug level while the client
/// receives a short message.
///
/// # Returns
/// - 401 Unauthorized - For every variant except `UserNotInDatabase`
/// - 404 Not Found - For `UserNotInDatabase`
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let message = match self {
            Self::UserNotInSession => "Not logged in",
            Self::UserNotInDatabase(_) => "User not found",
            Self::InvalidCredentials => "Invalid username or password",
            Self::NotManager { .. } => "You are not a manager of this team",
            Self::UnauthorizedAdmin(_) => "Administrator access required",
            Self::NotAuthorizedForRequest { .. } => "You are not allowed to view this request",
        };

        (
            self.status_code(),
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
