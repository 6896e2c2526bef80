use super::*;

/// Tests that saving writes the JSON caches back to the row.
///
/// Expected: Ok with the request id present after reloading
#[tokio::test]
async fn persists_request_queue() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_user(db).await?;
    let repo = UserRepository::new(db);

    let mut user = repo.find_by_id(created.id).await?.unwrap();
    let request_id = uuid::Uuid::new_v4();
    user.requests.push_unique(request_id);
    repo.save(user).await?;

    let reloaded = repo.find_by_id(created.id).await?.unwrap();
    assert!(reloaded.requests.contains(request_id));

    Ok(())
}

/// Tests saving a user whose row was deleted.
///
/// Expected: Err because there is no row to update
#[tokio::test]
async fn fails_for_deleted_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_user(db).await?;
    let repo = UserRepository::new(db);
    let user = repo.find_by_id(created.id).await?.unwrap();
    repo.delete(created.id).await?;

    assert!(repo.save(user).await.is_err());

    Ok(())
}
