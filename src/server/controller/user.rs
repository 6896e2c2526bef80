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
        user::{ChangePasswordDto, ChangeUsernameDto, SignupDto, UpdateProfileDto},
    },
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, session::AuthSession},
        model::user::{SignupParam, UpdateProfileParam},
        service::{roster_request::RosterRequestService, user::UserService},
        state::AppState,
    },
};

/// Create an account and log it in.
///
/// # Returns
/// - `201 Created` - Account created; body is the full user
/// - `400 Bad Request` - Invalid email, username or password, or taken email/username
pub async fn signup(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SignupDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db)
        .signup(SignupParam::from_dto(payload))
        .await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    Ok((StatusCode::CREATED, Json(user.into_dto(false))))
}

/// Get a user by id.
///
/// The caller's own record is returned in full; everyone else gets the public
/// projection without email and request queue.
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthSession::new(&session).get_user_id().await?;
    let user = UserService::new(&state.db).get(user_id).await?;

    let public = viewer != Some(user.id);

    Ok((StatusCode::OK, Json(user.into_dto(public))))
}

pub async fn search_users(
    State(state): State<AppState>,
    Query(query): Query<SearchQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let users = UserService::new(&state.db).search(&query.term).await?;

    let dto: Vec<_> = users.into_iter().map(|u| u.into_dto(true)).collect();

    Ok((StatusCode::OK, Json(dto)))
}

pub async fn update_profile(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<UpdateProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let user = UserService::new(&state.db)
        .update_profile(user.id, UpdateProfileParam::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto(false))))
}

pub async fn change_username(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<ChangeUsernameDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let user = UserService::new(&state.db)
        .change_username(user.id, &payload.username)
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto(false))))
}

pub async fn change_password(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<ChangePasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    UserService::new(&state.db)
        .change_password(user.id, &payload.old_password, &payload.new_password)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete the logged-in account and end its session.
///
/// # Returns
/// - `204 No Content` - Account removed from every roster and deleted
/// - `400 Bad Request` - Guest account, or sole manager of a live team
pub async fn delete_account(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    UserService::new(&state.db).delete_account(user.id).await?;
    AuthSession::new(&session).clear().await;

    Ok(StatusCode::NO_CONTENT)
}

/// List the roster requests in the logged-in user's queue.
pub async fn get_my_requests(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let requests = RosterRequestService::new(&state.db)
        .get_by_user(user.id)
        .await?;

    let dto: Vec<_> = requests.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}
