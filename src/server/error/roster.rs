use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use uuid::Uuid;
use validator::ValidationErrors;

use crate::model::api::ErrorDto;

/// Invariant violations and missing documents raised by validator chains and services.
///
/// The `Display` text is the message returned to the client.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RosterError {
    #[error("User {0} not found")]
    UserNotFound(Uuid),

    #[error("Team {0} not found")]
    TeamNotFound(Uuid),

    #[error("Archived team {0} not found")]
    ArchiveTeamNotFound(Uuid),

    #[error("Roster request {0} not found")]
    RequestNotFound(Uuid),

    #[error("Claim guest request {0} not found")]
    ClaimRequestNotFound(Uuid),

    #[error("Verification request {0} not found")]
    VerificationNotFound(Uuid),

    #[error("Team designation {0} not found")]
    DesignationNotFound(Uuid),

    #[error("User already manages this team")]
    AlreadyManages,

    #[error("The team has already requested this player")]
    TeamAlreadyRequested,

    #[error("The player has already requested to join this team")]
    PlayerAlreadyRequested,

    #[error("Player is already on this team")]
    PlayerAlreadyRostered,

    #[error("Player is not on this team")]
    PlayerNotOnTeam,

    #[error("Not allowed to respond to this request")]
    NotAllowedToRespond,

    #[error("Request has already been resolved")]
    RequestAlreadyResolved,

    #[error("Request is not in your list of requests")]
    RequestNotInList,

    #[error("Not accepting requests")]
    NotAcceptingRequests,

    #[error("Search term must be at least 3 characters")]
    NotEnoughSearchCharacters,

    #[error("Season dates must fall in this year or next, and the season cannot end before it starts")]
    InvalidSeasonDate,

    #[error("A new season cannot start before the current season ends")]
    SeasonStartsBeforeCurrentEnd,

    #[error("User is not a guest account")]
    UserNotGuest,

    #[error("A pending claim for this guest already exists")]
    ClaimRequestExists,

    #[error("The only manager of a team cannot leave it")]
    OnlyManagerCannotLeave,

    #[error("A team can only be deleted by its only manager")]
    MustBeOnlyManager,

    #[error("Guest accounts cannot perform this action")]
    GuestAccount,

    #[error("A pending verification request already exists for this team")]
    VerificationAlreadyRequested,

    #[error("Invalid or expired passcode")]
    InvalidPasscode,

    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Username must be 2-20 letters or numbers")]
    InvalidUsername,

    #[error("Password must be at least 8 characters and include upper and lower case letters, a number and a symbol")]
    WeakPassword,

    #[error("Email is already registered")]
    EmailTaken,

    #[error("Username is already taken")]
    UsernameTaken,

    #[error("Team name handle is already taken")]
    TeamnameTaken,

    #[error("Team designation name is already taken")]
    DesignationTaken,

    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

impl RosterError {
    /// 404 for missing documents, 401 for deleting a team with co-managers, 400 for
    /// every other invariant violation.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MustBeOnlyManager => StatusCode::UNAUTHORIZED,
            Self::UserNotFound(_)
            | Self::TeamNotFound(_)
            | Self::ArchiveTeamNotFound(_)
            | Self::RequestNotFound(_)
            | Self::ClaimRequestNotFound(_)
            | Self::VerificationNotFound(_)
            | Self::DesignationNotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

/// Input fields in the order their failures are reported when several fail at once.
const FIELD_ORDER: [&str; 8] = [
    "first_name",
    "last_name",
    "place",
    "name",
    "teamname",
    "email",
    "username",
    "password",
];

impl From<ValidationErrors> for RosterError {
    fn from(errors: ValidationErrors) -> Self {
        let failed = errors.field_errors();
        let field = FIELD_ORDER
            .into_iter()
            .find(|field| failed.contains_key(*field));

        match field {
            Some("email") => Self::InvalidEmail,
            Some("username") => Self::InvalidUsername,
            Some("password") => Self::WeakPassword,
            Some("first_name") => Self::MissingField("firstName"),
            Some("last_name") => Self::MissingField("lastName"),
            Some(field) => Self::MissingField(field),
            None => Self::MissingField("input"),
        }
    }
}

impl IntoResponse for RosterError {
    fn into_response(self) -> Response {
        (
            self.status_code(),
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
