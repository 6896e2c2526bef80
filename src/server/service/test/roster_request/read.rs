use super::*;

/// Tests who may read a request.
///
/// Expected: Ok for the player and the manager, Err(NotAuthorizedForRequest) for anyone
/// else
#[tokio::test]
async fn get_requires_party_to_request() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let manager = factory::create_user(db).await?;
    let (team, _) = factory::helpers::create_team_managed_by(db, &manager).await?;
    let player = factory::create_user(db).await?;
    let outsider = factory::create_user(db).await?;
    let service = RosterRequestService::new(db);

    let request = service.request_from_player(player.id, team.id).await?;

    let as_player = service.get(player.id, request.id).await?;
    assert_eq!(as_player.request.id, request.id);
    assert!(as_player.team.is_some());
    assert!(service.get(manager.id, request.id).await.is_ok());
    assert!(matches!(
        service.get(outsider.id, request.id).await,
        Err(AppError::AuthErr(AuthError::NotAuthorizedForRequest { .. }))
    ));

    Ok(())
}

/// Tests the per-team listing of requests.
///
/// Expected: the manager sees the queued request with its user attached
#[tokio::test]
async fn get_by_team_lists_queue() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let manager = factory::create_user(db).await?;
    let (team, _) = factory::helpers::create_team_managed_by(db, &manager).await?;
    let player = factory::create_user(db).await?;
    let service = RosterRequestService::new(db);

    let request = service.request_from_player(player.id, team.id).await?;
    let listed = service.get_by_team(manager.id, team.id).await?;

    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].request.id, request.id);
    assert_eq!(listed[0].user.as_ref().map(|u| u.id), Some(player.id));

    Ok(())
}
