use super::*;

/// Invitation accepted by the player.
///
/// Expected: Approved, player rostered on both sides, request id gone from the player's
/// queue and still on the team's
#[tokio::test]
async fn player_accepts_invitation() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let manager = factory::create_user(db).await?;
    let (team, _) = factory::helpers::create_team_managed_by(db, &manager).await?;
    let player = factory::create_user(db).await?;
    let service = RosterRequestService::new(db);

    let request = service
        .request_from_team(manager.id, team.id, player.id)
        .await?;
    assert_eq!(lookup::team(db, team.id).await?.requests.len(), 1);
    assert_eq!(lookup::user(db, player.id).await?.requests.len(), 1);

    let resolved = service.user_respond(player.id, request.id, true).await?;
    assert_eq!(resolved.status, RequestStatus::Approved);

    let team = lookup::team(db, team.id).await?;
    let player = lookup::user(db, player.id).await?;
    assert!(team.players.contains(player.id));
    assert!(player.player_teams.contains(team.id));
    assert!(!player.requests.contains(request.id));
    assert!(team.requests.contains(request.id));

    Ok(())
}

/// Invitation declined by the player.
///
/// Expected: Denied, player not rostered
#[tokio::test]
async fn player_declines_invitation() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let manager = factory::create_user(db).await?;
    let (team, _) = factory::helpers::create_team_managed_by(db, &manager).await?;
    let player = factory::create_user(db).await?;
    let service = RosterRequestService::new(db);

    let request = service
        .request_from_team(manager.id, team.id, player.id)
        .await?;
    let resolved = service.user_respond(player.id, request.id, false).await?;

    assert_eq!(resolved.status, RequestStatus::Denied);
    assert!(!lookup::team(db, team.id).await?.players.contains(player.id));
    assert!(lookup::user(db, player.id).await?.player_teams.is_empty());

    Ok(())
}

/// Player's request approved by a manager.
///
/// Expected: Approved, request id gone from the team's queue and still on the player's
#[tokio::test]
async fn manager_approves_player_request() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let manager = factory::create_user(db).await?;
    let (team, _) = factory::helpers::create_team_managed_by(db, &manager).await?;
    let player = factory::create_user(db).await?;
    let service = RosterRequestService::new(db);

    let request = service.request_from_player(player.id, team.id).await?;
    assert_eq!(request.request_source, RequestSource::Player);

    service.team_respond(manager.id, request.id, true).await?;

    let team = lookup::team(db, team.id).await?;
    let player = lookup::user(db, player.id).await?;
    assert!(team.players.contains(player.id));
    assert!(!team.requests.contains(request.id));
    assert!(player.requests.contains(request.id));

    Ok(())
}

/// Tests that the initiator cannot answer their own request.
///
/// Expected: Err(NotAllowedToRespond) for a manager answering an invitation
#[tokio::test]
async fn initiator_cannot_respond() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let manager = factory::create_user(db).await?;
    let (team, _) = factory::helpers::create_team_managed_by(db, &manager).await?;
    let player = factory::create_user(db).await?;
    let service = RosterRequestService::new(db);

    let request = service
        .request_from_team(manager.id, team.id, player.id)
        .await?;
    let result = service.team_respond(manager.id, request.id, true).await;

    assert!(matches!(
        result,
        Err(AppError::RosterErr(RosterError::NotAllowedToRespond))
    ));

    Ok(())
}

/// Tests that a resolved request cannot be answered again.
///
/// Expected: Err(RequestAlreadyResolved)
#[tokio::test]
async fn resolved_request_is_final() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let manager = factory::create_user(db).await?;
    let (team, _) = factory::helpers::create_team_managed_by(db, &manager).await?;
    let player = factory::create_user(db).await?;
    let service = RosterRequestService::new(db);

    let request = service.request_from_player(player.id, team.id).await?;
    service.team_respond(manager.id, request.id, false).await?;

    let again = service.team_respond(manager.id, request.id, true).await;
    assert!(matches!(
        again,
        Err(AppError::RosterErr(RosterError::RequestAlreadyResolved))
    ));

    Ok(())
}
