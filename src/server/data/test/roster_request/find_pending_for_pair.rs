use super::*;

/// Tests that a pending request is found regardless of which side created it.
///
/// Expected: Ok(Some) with the player-initiated request
#[tokio::test]
async fn finds_pending_from_either_source() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let team = factory::create_team(db).await?;
    let repo = RosterRequestRepository::new(db);
    let request = repo.create(team.id, user.id, RequestSource::Player).await?;

    let found = repo.find_pending_for_pair(user.id, team.id).await?;

    assert_eq!(found.map(|r| r.id), Some(request.id));

    Ok(())
}

/// Tests that resolved requests are ignored.
///
/// Expected: Ok(None) when the only request for the pair is approved
#[tokio::test]
async fn ignores_resolved_requests() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let team = factory::create_team(db).await?;
    factory::roster_request::RosterRequestFactory::new(db, team.id, user.id)
        .status(RequestStatus::Approved)
        .build()
        .await?;

    let found = RosterRequestRepository::new(db)
        .find_pending_for_pair(user.id, team.id)
        .await?;

    assert!(found.is_none());

    Ok(())
}
