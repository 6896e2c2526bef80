use super::*;

/// Tests that a team invitation lands in both queues.
///
/// Expected: Ok with a pending team-sourced request listed once by team and user
#[tokio::test]
async fn team_request_is_queued_on_both_sides() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let manager = factory::create_user(db).await?;
    let (team, _) = factory::helpers::create_team_managed_by(db, &manager).await?;
    let player = factory::create_user(db).await?;

    let request = RosterRequestService::new(db)
        .request_from_team(manager.id, team.id, player.id)
        .await?;

    assert_eq!(request.status, RequestStatus::Pending);
    assert_eq!(request.request_source, RequestSource::Team);

    let team = lookup::team(db, team.id).await?;
    let player = lookup::user(db, player.id).await?;
    assert_eq!(team.requests.0, vec![request.id]);
    assert_eq!(player.requests.0, vec![request.id]);

    Ok(())
}

/// Tests that a second pending request for the same pair is rejected whichever side
/// sends it.
///
/// Expected: Err(TeamAlreadyRequested) for both the repeat invitation and the player's
/// own request
#[tokio::test]
async fn pending_request_blocks_duplicates() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let manager = factory::create_user(db).await?;
    let (team, _) = factory::helpers::create_team_managed_by(db, &manager).await?;
    let player = factory::create_user(db).await?;
    let service = RosterRequestService::new(db);

    service
        .request_from_team(manager.id, team.id, player.id)
        .await?;

    let repeat = service
        .request_from_team(manager.id, team.id, player.id)
        .await;
    assert!(matches!(
        repeat,
        Err(AppError::RosterErr(RosterError::TeamAlreadyRequested))
    ));

    let from_player = service.request_from_player(player.id, team.id).await;
    assert!(matches!(
        from_player,
        Err(AppError::RosterErr(RosterError::TeamAlreadyRequested))
    ));

    let team = lookup::team(db, team.id).await?;
    assert_eq!(team.requests.len(), 1);

    Ok(())
}

/// Tests that a player cannot ask to join a team whose roster is closed.
///
/// Expected: Err(NotAcceptingRequests)
#[tokio::test]
async fn player_request_needs_open_roster() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::team::TeamFactory::new(db)
        .roster_open(false)
        .build()
        .await?;
    let player = factory::create_user(db).await?;

    let result = RosterRequestService::new(db)
        .request_from_player(player.id, team.id)
        .await;

    assert!(matches!(
        result,
        Err(AppError::RosterErr(RosterError::NotAcceptingRequests))
    ));

    Ok(())
}

/// Tests that users closed to requests cannot be invited.
///
/// Expected: Err(NotAcceptingRequests) and no request stored
#[tokio::test]
async fn team_request_needs_open_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let manager = factory::create_user(db).await?;
    let (team, _) = factory::helpers::create_team_managed_by(db, &manager).await?;
    let player = factory::user::UserFactory::new(db)
        .open_to_requests(false)
        .build()
        .await?;

    let result = RosterRequestService::new(db)
        .request_from_team(manager.id, team.id, player.id)
        .await;

    assert!(matches!(
        result,
        Err(AppError::RosterErr(RosterError::NotAcceptingRequests))
    ));
    assert!(lookup::team(db, team.id).await?.requests.is_empty());

    Ok(())
}

/// Tests that only managers can invite players.
///
/// Expected: Err(NotManager)
#[tokio::test]
async fn team_request_requires_manager() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let outsider = factory::create_user(db).await?;
    let team = factory::create_team(db).await?;
    let player = factory::create_user(db).await?;

    let result = RosterRequestService::new(db)
        .request_from_team(outsider.id, team.id, player.id)
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::NotManager { .. }))
    ));

    Ok(())
}
