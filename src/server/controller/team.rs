use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;
use uuid::Uuid;

use crate::{
    model::{
        api::SearchQueryDto,
        team::{
            AddGuestDto, CreateTeamDto, JoinWithCodeDto, RolloverDto, RosterOpenDto,
            SetDesignationDto, TeamMemberDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::team::{AddGuestParam, CreateTeamParam, RolloverParam},
        service::{
            claim_guest_request::ClaimGuestRequestService, roster_request::RosterRequestService,
            team::TeamService,
        },
        state::AppState,
    },
};

/// Create the first season of a new team lineage.
///
/// The caller becomes the team's only manager.
///
/// # Returns
/// - `201 Created` - Team created
/// - `400 Bad Request` - Missing field, invalid season dates, taken teamname, or guest caller
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - Unknown designation
pub async fn create_team(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateTeamDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let team = TeamService::new(&state.db)
        .create(user.id, CreateTeamParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(team.into_dto(false))))
}

/// Get the public view of a live team; the request queue is omitted.
pub async fn get_team(
    State(state): State<AppState>,
    Path(team_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let team = TeamService::new(&state.db).get(team_id, true).await?;

    Ok((StatusCode::OK, Json(team.into_dto(true))))
}

/// Get a live team including its request queue. Managers only.
pub async fn get_managed_team(
    State(state): State<AppState>,
    session: Session,
    Path(team_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let team = TeamService::new(&state.db)
        .get_managed(team_id, user.id)
        .await?;

    Ok((StatusCode::OK, Json(team.into_dto(false))))
}

pub async fn search_teams(
    State(state): State<AppState>,
    Query(query): Query<SearchQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let teams = TeamService::new(&state.db)
        .search(&query.term, query.roster_open)
        .await?;

    let dto: Vec<_> = teams.into_iter().map(|t| t.into_dto(true)).collect();

    Ok((StatusCode::OK, Json(dto)))
}

/// Close the current season and start the next one.
///
/// The current season is archived, its pending requests are purged and a successor
/// team with a new id continues the lineage.
///
/// # Returns
/// - `200 OK` - The successor team
/// - `400 Bad Request` - Invalid season dates, or the new season starts before the current one ends
/// - `401 Unauthorized` - Not a manager of the team
/// - `404 Not Found` - Team not found
pub async fn rollover_team(
    State(state): State<AppState>,
    session: Session,
    Path(team_id): Path<Uuid>,
    Json(payload): Json<RolloverDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let successor = TeamService::new(&state.db)
        .rollover(RolloverParam::from_dto(user.id, team_id, payload))
        .await?;

    Ok((StatusCode::OK, Json(successor.into_dto(false))))
}

/// Archive the current season without a successor.
pub async fn archive_team(
    State(state): State<AppState>,
    session: Session,
    Path(team_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let archive = TeamService::new(&state.db).archive(user.id, team_id).await?;

    Ok((StatusCode::OK, Json(archive.into_dto())))
}

/// Delete a live team. Only its sole manager may do this.
pub async fn delete_team(
    State(state): State<AppState>,
    session: Session,
    Path(team_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    TeamService::new(&state.db).delete(user.id, team_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn set_roster_open(
    State(state): State<AppState>,
    session: Session,
    Path(team_id): Path<Uuid>,
    Json(payload): Json<RosterOpenDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let team = TeamService::new(&state.db)
        .set_roster_open(user.id, team_id, payload.open)
        .await?;

    Ok((StatusCode::OK, Json(team.into_dto(false))))
}

pub async fn set_designation(
    State(state): State<AppState>,
    session: Session,
    Path(team_id): Path<Uuid>,
    Json(payload): Json<SetDesignationDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let team = TeamService::new(&state.db)
        .set_designation(user.id, team_id, payload.designation)
        .await?;

    Ok((StatusCode::OK, Json(team.into_dto(false))))
}

pub async fn remove_player(
    State(state): State<AppState>,
    session: Session,
    Path((team_id, user_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let team = TeamService::new(&state.db)
        .remove_player(user.id, team_id, user_id)
        .await?;

    Ok((StatusCode::OK, Json(team.into_dto(false))))
}

/// Leave a team the caller plays on.
pub async fn leave_team(
    State(state): State<AppState>,
    session: Session,
    Path(team_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let user = TeamService::new(&state.db).leave(user.id, team_id).await?;

    Ok((StatusCode::OK, Json(user.into_dto(false))))
}

pub async fn add_manager(
    State(state): State<AppState>,
    session: Session,
    Path(team_id): Path<Uuid>,
    Json(payload): Json<TeamMemberDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let team = TeamService::new(&state.db)
        .add_manager(user.id, team_id, payload.user_id)
        .await?;

    Ok((StatusCode::OK, Json(team.into_dto(false))))
}

pub async fn remove_manager(
    State(state): State<AppState>,
    session: Session,
    Path((team_id, user_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let team = TeamService::new(&state.db)
        .remove_manager(user.id, team_id, user_id)
        .await?;

    Ok((StatusCode::OK, Json(team.into_dto(false))))
}

/// Issue a join code that lets any user join the team until it expires.
///
/// # Returns
/// - `201 Created` - The code and its expiry
/// - `401 Unauthorized` - Not a manager of the team
pub async fn create_join_code(
    State(state): State<AppState>,
    session: Session,
    Path(team_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let passcode = TeamService::new(&state.db)
        .create_bulk_join_code(user.id, team_id)
        .await?;

    Ok((StatusCode::CREATED, Json(passcode.into_dto())))
}

pub async fn join_with_code(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<JoinWithCodeDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let team = TeamService::new(&state.db)
        .join_with_code(user.id, &payload.code)
        .await?;

    Ok((StatusCode::OK, Json(team.into_dto(true))))
}

/// Add a guest placeholder (a player without an account) to the roster.
///
/// # Returns
/// - `201 Created` - The updated team
/// - `400 Bad Request` - Missing first or last name
/// - `401 Unauthorized` - Not a manager of the team
pub async fn add_guest(
    State(state): State<AppState>,
    session: Session,
    Path(team_id): Path<Uuid>,
    Json(payload): Json<AddGuestDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let param = AddGuestParam::from_dto(
        user.id,
        team_id,
        state.guest_email_domain.clone(),
        payload,
    );
    let (team, _guest) = TeamService::new(&state.db).add_guest(param).await?;

    Ok((StatusCode::CREATED, Json(team.into_dto(false))))
}

pub async fn get_team_requests(
    State(state): State<AppState>,
    session: Session,
    Path(team_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let requests = RosterRequestService::new(&state.db)
        .get_by_team(user.id, team_id)
        .await?;

    let dto: Vec<_> = requests.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}

pub async fn get_team_claims(
    State(state): State<AppState>,
    session: Session,
    Path(team_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let claims = ClaimGuestRequestService::new(&state.db)
        .get_by_team(user.id, team_id)
        .await?;

    let dto: Vec<_> = claims.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}

pub async fn get_archive_team(
    State(state): State<AppState>,
    Path(archive_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let archive = TeamService::new(&state.db).get_archive(archive_id).await?;

    Ok((StatusCode::OK, Json(archive.into_dto())))
}

/// Archived seasons of a lineage, oldest first.
pub async fn get_lineage_history(
    State(state): State<AppState>,
    Path(continuation_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let archives = TeamService::new(&state.db)
        .get_history(continuation_id)
        .await?;

    let dto: Vec<_> = archives.into_iter().map(|a| a.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}
