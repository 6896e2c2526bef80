use super::*;

/// Tests that either the email or the username identifies a user.
///
/// Expected: Ok(Some) for both identifiers and Ok(None) for an unknown one
#[tokio::test]
async fn finds_by_email_or_username() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .username("dana")
        .email("dana@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let by_email = repo.find_by_identifier("dana@example.com").await?;
    let by_username = repo.find_by_identifier("dana").await?;
    let unknown = repo.find_by_identifier("nobody").await?;

    assert_eq!(by_email.map(|u| u.id), Some(user.id));
    assert_eq!(by_username.map(|u| u.id), Some(user.id));
    assert!(unknown.is_none());

    Ok(())
}
