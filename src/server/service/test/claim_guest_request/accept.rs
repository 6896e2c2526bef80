use super::*;
use sea_orm::{ActiveModelTrait, ActiveValue, IntoActiveModel};

/// Accepting a claim moves the guest's history onto the claimant.
///
/// Expected: claimant takes the guest's roster spot and archive entry, competing claim
/// denied, guest deleted
#[tokio::test]
async fn accept_merges_guest() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let manager = factory::create_user(db).await?;
    let (team, _) = factory::helpers::create_team_managed_by(db, &manager).await?;
    let guest = factory::user::create_guest(db).await?;
    let (_, guest) = factory::helpers::add_player(db, &team, &guest).await?;

    let old_season = factory::create_team(db).await?;
    let mut archive_teams = guest.archive_teams.clone();
    archive_teams.push_unique(factory::helpers::team_snapshot(&old_season));
    let mut active = guest.clone().into_active_model();
    active.archive_teams = ActiveValue::Set(archive_teams);
    active.update(db).await?;

    let claimant = factory::create_user(db).await?;
    let rival = factory::create_user(db).await?;
    let service = ClaimGuestRequestService::new(db);
    let claim = service.create(claimant.id, guest.id, team.id).await?;
    let competing = service.create(rival.id, guest.id, team.id).await?;

    let approved = service.accept(manager.id, claim.id).await?;
    assert_eq!(approved.status, RequestStatus::Approved);

    let team = lookup::team(db, team.id).await?;
    assert!(team.players.contains(claimant.id));
    assert!(!team.players.contains(guest.id));

    let claimant = lookup::user(db, claimant.id).await?;
    assert!(claimant.player_teams.contains(team.id));
    assert!(claimant.archive_teams.contains(old_season.id));

    let competing = ClaimGuestRequestRepository::new(db)
        .find_by_id(competing.id)
        .await?;
    assert_eq!(competing.map(|c| c.status), Some(RequestStatus::Denied));
    assert!(lookup::user(db, guest.id).await.is_err());

    Ok(())
}

/// Accepting a claim for a team the claimant already plays on.
///
/// Expected: claimant listed exactly once, guest removed and deleted
#[tokio::test]
async fn accept_is_idempotent_for_existing_member() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let manager = factory::create_user(db).await?;
    let (team, _) = factory::helpers::create_team_managed_by(db, &manager).await?;
    let claimant = factory::create_user(db).await?;
    let (team, _) = factory::helpers::add_player(db, &team, &claimant).await?;
    let guest = factory::user::create_guest(db).await?;
    factory::helpers::add_player(db, &team, &guest).await?;

    let service = ClaimGuestRequestService::new(db);
    let claim = service.create(claimant.id, guest.id, team.id).await?;
    service.accept(manager.id, claim.id).await?;

    let team = lookup::team(db, team.id).await?;
    let entries = team.players.0.iter().filter(|p| p.id == claimant.id).count();
    assert_eq!(entries, 1);
    assert!(!team.players.contains(guest.id));

    let claimant = lookup::user(db, claimant.id).await?;
    assert_eq!(claimant.player_teams.ids(), vec![team.id]);
    assert!(lookup::user(db, guest.id).await.is_err());

    Ok(())
}

/// Tests denial and the resolved-claim guard.
///
/// Expected: Denied; accepting afterwards fails with RequestAlreadyResolved; the guest
/// survives
#[tokio::test]
async fn denied_claim_cannot_be_accepted() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let manager = factory::create_user(db).await?;
    let (team, _) = factory::helpers::create_team_managed_by(db, &manager).await?;
    let guest = factory::user::create_guest(db).await?;
    factory::helpers::add_player(db, &team, &guest).await?;
    let claimant = factory::create_user(db).await?;

    let service = ClaimGuestRequestService::new(db);
    let claim = service.create(claimant.id, guest.id, team.id).await?;

    let denied = service.deny(manager.id, claim.id).await?;
    assert_eq!(denied.status, RequestStatus::Denied);

    assert!(matches!(
        service.accept(manager.id, claim.id).await,
        Err(AppError::RosterErr(RosterError::RequestAlreadyResolved))
    ));
    assert!(lookup::user(db, guest.id).await?.guest);
    assert!(service.get_by_team(manager.id, team.id).await?.is_empty());

    Ok(())
}

/// Tests that only the claim team's managers may resolve it.
///
/// Expected: Err(NotManager)
#[tokio::test]
async fn accept_requires_manager() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::create_team(db).await?;
    let guest = factory::user::create_guest(db).await?;
    factory::helpers::add_player(db, &team, &guest).await?;
    let claimant = factory::create_user(db).await?;
    let claim = factory::create_claim_guest_request(db, claimant.id, guest.id, team.id).await?;

    let result = ClaimGuestRequestService::new(db)
        .accept(claimant.id, claim.id)
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::NotManager { .. }))
    ));

    Ok(())
}
