use super::*;

/// Tests re-inserting a team under a new id after deleting the old row.
///
/// This is the write sequence used by rollover: the teamname is unique, so the old
/// record must be gone before the successor is inserted.
///
/// Expected: Ok with the team reachable only by the new id
#[tokio::test]
async fn reinserts_team_under_new_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_team(db).await?;
    let repo = TeamRepository::new(db);

    let mut team = Team::from_entity(created.clone());
    team.id = uuid::Uuid::new_v4();
    repo.delete(created.id).await?;
    let successor = repo.create(team).await?;

    assert!(repo.find_by_id(created.id).await?.is_none());
    assert_eq!(
        repo.find_by_teamname(&created.teamname).await?.map(|t| t.id),
        Some(successor.id)
    );
    assert_eq!(successor.continuation_id, created.continuation_id);

    Ok(())
}

/// Tests that two live teams cannot share a teamname.
///
/// Expected: Err on insert
#[tokio::test]
async fn rejects_duplicate_teamname() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_team(db).await?;
    let mut copy = Team::from_entity(created);
    copy.id = uuid::Uuid::new_v4();

    assert!(TeamRepository::new(db).create(copy).await.is_err());

    Ok(())
}
