use super::*;

/// Tests word prefix matching within place and name.
///
/// Expected: Ok with teams whose place or any word of the name starts with the token
#[tokio::test]
async fn matches_word_prefixes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let pittsburgh = factory::team::TeamFactory::new(db)
        .place("Pittsburgh")
        .name("Temper")
        .build()
        .await?;
    let cleveland = factory::team::TeamFactory::new(db)
        .place("Cleveland")
        .name("Steel Tempest")
        .build()
        .await?;
    factory::team::TeamFactory::new(db)
        .place("Boston")
        .name("Glory")
        .build()
        .await?;

    let results = TeamRepository::new(db)
        .search(&["temp".to_string()], None)
        .await?;
    let ids: Vec<_> = results.iter().map(|t| t.id).collect();

    assert_eq!(ids.len(), 2);
    assert!(ids.contains(&pittsburgh.id));
    assert!(ids.contains(&cleveland.id));

    Ok(())
}

/// Tests the roster open filter.
///
/// Expected: Ok with only the closed team when filtering on `Some(false)`
#[tokio::test]
async fn filters_on_roster_open() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::team::TeamFactory::new(db)
        .place("Austin")
        .roster_open(true)
        .build()
        .await?;
    let closed = factory::team::TeamFactory::new(db)
        .place("Austin")
        .roster_open(false)
        .build()
        .await?;

    let results = TeamRepository::new(db)
        .search(&["aus".to_string()], Some(false))
        .await?;

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, closed.id);

    Ok(())
}

/// Tests that LIKE wildcards in input are not honoured.
///
/// Expected: Ok with no results for a bare `%%%` token
#[tokio::test]
async fn ignores_wildcards_in_tokens() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_team(db).await?;

    let results = TeamRepository::new(db)
        .search(&["%%%".to_string()], None)
        .await?;

    assert!(results.is_empty());

    Ok(())
}
