use super::*;

/// Tests that guests are never returned and multi-word queries are ranked.
///
/// Expected: the exact full-name match first, the guest absent
#[tokio::test]
async fn search_ranks_and_skips_guests() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let partial = factory::user::UserFactory::new(db)
        .first_name("Jordan")
        .last_name("Riverside")
        .build()
        .await?;
    let exact = factory::user::UserFactory::new(db)
        .first_name("Jordan")
        .last_name("Rivera")
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .first_name("Jordan")
        .last_name("Rivera")
        .guest(true)
        .build()
        .await?;

    let results = UserService::new(db).search("Jordan Rivera").await?;

    let ids: Vec<_> = results.iter().map(|user| user.id).collect();
    assert_eq!(ids, vec![exact.id, partial.id]);

    Ok(())
}
