use super::*;

/// Tests filing a claim and the duplicate guard.
///
/// Expected: pending claim stored; the same claim again fails with ClaimRequestExists
#[tokio::test]
async fn create_claim_once() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::create_team(db).await?;
    let guest = factory::user::create_guest(db).await?;
    factory::helpers::add_player(db, &team, &guest).await?;
    let user = factory::create_user(db).await?;
    let service = ClaimGuestRequestService::new(db);

    let claim = service.create(user.id, guest.id, team.id).await?;
    assert_eq!(claim.status, RequestStatus::Pending);

    let again = service.create(user.id, guest.id, team.id).await;
    assert!(matches!(
        again,
        Err(AppError::RosterErr(RosterError::ClaimRequestExists))
    ));

    Ok(())
}

/// Tests that only rostered guests can be claimed.
///
/// Expected: UserNotGuest for a real account, PlayerNotOnTeam for an unrostered guest
#[tokio::test]
async fn create_requires_rostered_guest() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::create_team(db).await?;
    let real = factory::create_user(db).await?;
    factory::helpers::add_player(db, &team, &real).await?;
    let loose_guest = factory::user::create_guest(db).await?;
    let user = factory::create_user(db).await?;
    let service = ClaimGuestRequestService::new(db);

    assert!(matches!(
        service.create(user.id, real.id, team.id).await,
        Err(AppError::RosterErr(RosterError::UserNotGuest))
    ));
    assert!(matches!(
        service.create(user.id, loose_guest.id, team.id).await,
        Err(AppError::RosterErr(RosterError::PlayerNotOnTeam))
    ));

    Ok(())
}
