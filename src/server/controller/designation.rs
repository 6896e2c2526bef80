use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;
use uuid::Uuid;

use crate::{
    model::designation::CreateDesignationDto,
    server::{
        error::AppError, middleware::auth::AuthGuard, service::designation::DesignationService,
        state::AppState,
    },
};

/// Create a team designation. Administrators only.
///
/// # Returns
/// - `201 Created` - New designation
/// - `400 Bad Request` - Missing or taken name
/// - `401 Unauthorized` - Caller is not on the admin allow-list
pub async fn create_designation(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateDesignationDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let designation = DesignationService::new(&state.db, &state.admins)
        .create(user.id, &payload.name, &payload.description)
        .await?;

    Ok((StatusCode::CREATED, Json(designation.into_dto())))
}

pub async fn list_designations(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let designations = DesignationService::new(&state.db, &state.admins)
        .list()
        .await?;

    let dto: Vec<_> = designations.into_iter().map(|d| d.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}

pub async fn get_designation(
    State(state): State<AppState>,
    Path(designation_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let designation = DesignationService::new(&state.db, &state.admins)
        .get(designation_id)
        .await?;

    Ok((StatusCode::OK, Json(designation.into_dto())))
}
