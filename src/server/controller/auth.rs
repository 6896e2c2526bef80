use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::user::{LoginDto, PasswordRecoveryDto, ResetPasswordDto},
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, session::AuthSession},
        service::auth::AuthService,
        state::AppState,
    },
};

/// Log in with an email or username and a password.
///
/// Stores the user's id in the session on success. Guest accounts can never log in.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session, receives the user id
/// - `payload` - Identifier (email or username) and password
///
/// # Returns
/// - `200 OK` - Logged in; body is the full (non-public) user
/// - `401 Unauthorized` - Unknown identifier, wrong password, or guest account
/// - `500 Internal Server Error` - Database or session error
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthService::new(&state.db)
        .login(&payload.identifier, &payload.password)
        .await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    tracing::info!("User {} logged in", user.id);

    Ok((StatusCode::OK, Json(user.into_dto(false))))
}

/// Log out the current user.
///
/// Flushes the session, after which its id can no longer authenticate.
///
/// # Returns
/// - `204 No Content` - Session cleared (also when nobody was logged in)
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;

    Ok(StatusCode::NO_CONTENT)
}

/// Get the logged-in user.
///
/// # Returns
/// - `200 OK` - The session user, including email and request queue
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - The session's user no longer exists
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    Ok((StatusCode::OK, Json(user.into_dto(false))))
}

/// Start password recovery for an email address.
///
/// Always answers 204 so the endpoint cannot be used to probe which emails exist.
///
/// # Returns
/// - `204 No Content` - Recovery code sent, or the email is unknown
/// - `500 Internal Server Error` - Database or mail delivery error
pub async fn request_password_recovery(
    State(state): State<AppState>,
    Json(payload): Json<PasswordRecoveryDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthService::new(&state.db)
        .request_password_recovery(state.mailer.as_ref(), &payload.email)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Set a new password using a recovery code.
///
/// # Returns
/// - `204 No Content` - Password changed and code consumed
/// - `400 Bad Request` - Invalid or expired code, or weak password
pub async fn reset_password(
    State(state): State<AppState>,
    Json(payload): Json<ResetPasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthService::new(&state.db)
        .reset_password(&payload.email, &payload.code, &payload.new_password)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
