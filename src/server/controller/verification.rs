use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;
use uuid::Uuid;

use crate::server::{
    error::AppError, middleware::auth::AuthGuard, service::verification::VerificationService,
    state::AppState,
};

pub async fn request_verification(
    State(state): State<AppState>,
    session: Session,
    Path(team_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let request = VerificationService::new(&state.db, &state.admins)
        .request(user.id, team_id)
        .await?;

    Ok((StatusCode::CREATED, Json(request.into_dto())))
}

/// Pending verification requests. Administrators only.
pub async fn list_pending(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let requests = VerificationService::new(&state.db, &state.admins)
        .list_pending(user.id)
        .await?;

    let dto: Vec<_> = requests.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}

pub async fn approve(
    State(state): State<AppState>,
    session: Session,
    Path(request_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let request = VerificationService::new(&state.db, &state.admins)
        .approve(user.id, request_id)
        .await?;

    Ok((StatusCode::OK, Json(request.into_dto())))
}

pub async fn deny(
    State(state): State<AppState>,
    session: Session,
    Path(request_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let request = VerificationService::new(&state.db, &state.admins)
        .deny(user.id, request_id)
        .await?;

    Ok((StatusCode::OK, Json(request.into_dto())))
}
