use super::*;

/// Multi-word queries rank the closest team first.
///
/// Expected: "Pittsburgh Temper" ranked above "Pittsburgh Crucible" even though the
/// latter was stored first
#[tokio::test]
async fn multi_word_query_ranks_closest_first() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let crucible = factory::team::TeamFactory::new(db)
        .place("Pittsburgh")
        .name("Crucible")
        .teamname("crucible")
        .build()
        .await?;
    let temper = factory::team::TeamFactory::new(db)
        .place("Pittsburgh")
        .name("Temper")
        .teamname("temper")
        .build()
        .await?;

    let results = TeamService::new(db)
        .search("Pittsburgh Temper", None)
        .await?;

    let ids: Vec<_> = results.iter().map(|team| team.id).collect();
    assert_eq!(ids, vec![temper.id, crucible.id]);

    Ok(())
}

/// Single-word queries keep store order.
///
/// Expected: both teams returned in insertion order
#[tokio::test]
async fn single_word_query_is_not_ranked() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let crucible = factory::team::TeamFactory::new(db)
        .place("Pittsburgh")
        .name("Crucible")
        .build()
        .await?;
    let temper = factory::team::TeamFactory::new(db)
        .place("Pittsburgh")
        .name("Temper")
        .build()
        .await?;

    let results = TeamService::new(db).search("Pittsburgh", None).await?;

    let ids: Vec<_> = results.iter().map(|team| team.id).collect();
    assert_eq!(ids, vec![crucible.id, temper.id]);

    Ok(())
}

/// Tests the minimum search length.
///
/// Expected: Err(NotEnoughSearchCharacters)
#[tokio::test]
async fn short_term_is_rejected() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = TeamService::new(db).search(" ab ", None).await;

    assert!(matches!(
        result,
        Err(AppError::RosterErr(RosterError::NotEnoughSearchCharacters))
    ));

    Ok(())
}
