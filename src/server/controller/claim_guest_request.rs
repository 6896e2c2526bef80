use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;
use uuid::Uuid;

use crate::{
    model::claim_guest_request::CreateClaimGuestRequestDto,
    server::{
        error::AppError, middleware::auth::AuthGuard,
        service::claim_guest_request::ClaimGuestRequestService, state::AppState,
    },
};

/// Claim a guest placeholder as the logged-in user.
///
/// # Returns
/// - `201 Created` - Pending claim
/// - `400 Bad Request` - Target is not a guest, is not on the team, or a claim already exists
/// - `404 Not Found` - Guest or team not found
pub async fn create_claim(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateClaimGuestRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let claim = ClaimGuestRequestService::new(&state.db)
        .create(user.id, payload.guest_id, payload.team_id)
        .await?;

    Ok((StatusCode::CREATED, Json(claim.into_dto())))
}

/// Accept a claim: the claimant takes over the guest's rosters and history and the
/// guest account is deleted.
pub async fn accept_claim(
    State(state): State<AppState>,
    session: Session,
    Path(claim_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let claim = ClaimGuestRequestService::new(&state.db)
        .accept(user.id, claim_id)
        .await?;

    Ok((StatusCode::OK, Json(claim.into_dto())))
}

pub async fn deny_claim(
    State(state): State<AppState>,
    session: Session,
    Path(claim_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let claim = ClaimGuestRequestService::new(&state.db)
        .deny(user.id, claim_id)
        .await?;

    Ok((StatusCode::OK, Json(claim.into_dto())))
}
