use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;
use uuid::Uuid;

use crate::{
    model::roster_request::{RequestFromPlayerDto, RequestFromTeamDto, RespondDto},
    server::{
        error::AppError, middleware::auth::AuthGuard,
        service::roster_request::RosterRequestService, state::AppState,
    },
};

/// Invite a user onto a team. Called by a manager of the team.
///
/// The request id is queued on both the team and the user.
///
/// # Returns
/// - `201 Created` - The pending request with its team and user summaries
/// - `400 Bad Request` - Pending request exists, player already rostered, or user not accepting requests
/// - `401 Unauthorized` - Not a manager of the team
/// - `404 Not Found` - Team or user not found
pub async fn request_from_team(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<RequestFromTeamDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;
    let service = RosterRequestService::new(&state.db);

    let request = service
        .request_from_team(user.id, payload.team_id, payload.user_id)
        .await?;
    let detail = service.get(user.id, request.id).await?;

    Ok((StatusCode::CREATED, Json(detail.into_dto())))
}

/// Ask to join a team whose roster is open. Called by the player.
pub async fn request_from_player(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<RequestFromPlayerDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;
    let service = RosterRequestService::new(&state.db);

    let request = service.request_from_player(user.id, payload.team_id).await?;
    let detail = service.get(user.id, request.id).await?;

    Ok((StatusCode::CREATED, Json(detail.into_dto())))
}

/// Get a request. Only its user or a manager of its team may read it.
pub async fn get_request(
    State(state): State<AppState>,
    session: Session,
    Path(request_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let detail = RosterRequestService::new(&state.db)
        .get(user.id, request_id)
        .await?;

    Ok((StatusCode::OK, Json(detail.into_dto())))
}

/// Manager response to a player-initiated request.
pub async fn team_respond(
    State(state): State<AppState>,
    session: Session,
    Path(request_id): Path<Uuid>,
    Json(payload): Json<RespondDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;
    let service = RosterRequestService::new(&state.db);

    service
        .team_respond(user.id, request_id, payload.approve)
        .await?;
    let detail = service.get(user.id, request_id).await?;

    Ok((StatusCode::OK, Json(detail.into_dto())))
}

/// Player response to a team-initiated request.
pub async fn user_respond(
    State(state): State<AppState>,
    session: Session,
    Path(request_id): Path<Uuid>,
    Json(payload): Json<RespondDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;
    let service = RosterRequestService::new(&state.db);

    service
        .user_respond(user.id, request_id, payload.approve)
        .await?;
    let detail = service.get(user.id, request_id).await?;

    Ok((StatusCode::OK, Json(detail.into_dto())))
}

/// Withdraw a request from the team side, removing it from both queues.
pub async fn team_delete(
    State(state): State<AppState>,
    session: Session,
    Path(request_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    RosterRequestService::new(&state.db)
        .team_delete(user.id, request_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn user_delete(
    State(state): State<AppState>,
    session: Session,
    Path(request_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    RosterRequestService::new(&state.db)
        .user_delete(user.id, request_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
