use super::*;

/// Tests prefix matching on names.
///
/// Verifies that a token matches the start of the first name, last name or username,
/// and that guests never appear in results.
///
/// Expected: Ok with only the non-guest match
#[tokio::test]
async fn matches_name_prefix_and_skips_guests() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let jordan = factory::user::UserFactory::new(db)
        .first_name("Jordan")
        .last_name("Baker")
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .first_name("Jordana")
        .last_name("Guest")
        .guest(true)
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .first_name("Riley")
        .last_name("Smith")
        .build()
        .await?;

    let results = UserRepository::new(db)
        .search(&["jor".to_string()])
        .await?;

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, jordan.id);

    Ok(())
}

/// Tests that an empty token list matches nothing.
///
/// Expected: Ok with empty results
#[tokio::test]
async fn empty_tokens_match_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;

    let results = UserRepository::new(db).search(&[]).await?;

    assert!(results.is_empty());

    Ok(())
}
