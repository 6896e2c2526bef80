use super::*;

/// Tests that a new team starts its own lineage with the creator managing it.
///
/// Expected: continuation_id == id, season 1, roster closed, manager on both sides
#[tokio::test]
async fn creates_lineage_root() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;
    let team = TeamService::new(db)
        .create(creator.id, create_param("temper"))
        .await?;

    assert_eq!(team.continuation_id, team.id);
    assert_eq!(team.season_number, 1);
    assert!(!team.roster_open);
    assert!(team.managers.contains(creator.id));
    assert!(team.players.is_empty());

    let creator = lookup::user(db, creator.id).await?;
    assert!(creator.manager_teams.contains(team.id));

    Ok(())
}

/// Tests that seasons must fall within this year or next.
///
/// Expected: Err(InvalidSeasonDate) for a season two years ahead
#[tokio::test]
async fn rejects_out_of_range_season() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;
    let mut param = create_param("farfuture");
    let (start, end) = season_param(current_year() + 2);
    param.season_start = start;
    param.season_end = end;

    let result = TeamService::new(db).create(creator.id, param).await;

    assert!(matches!(
        result,
        Err(AppError::RosterErr(RosterError::InvalidSeasonDate))
    ));

    Ok(())
}

/// Tests handle uniqueness and required fields.
///
/// Expected: Err(TeamnameTaken) for a reused handle, Err(MissingField) for a blank name
#[tokio::test]
async fn rejects_taken_handle_and_blank_fields() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;
    let service = TeamService::new(db);
    service.create(creator.id, create_param("temper")).await?;

    let taken = service.create(creator.id, create_param("temper")).await;
    assert!(matches!(
        taken,
        Err(AppError::RosterErr(RosterError::TeamnameTaken))
    ));

    let mut blank = create_param("blank");
    blank.name = "   ".to_string();
    let missing = service.create(creator.id, blank).await;
    assert!(matches!(
        missing,
        Err(AppError::RosterErr(RosterError::MissingField("name")))
    ));

    Ok(())
}

/// Tests that the public view hides the request queue.
///
/// Expected: requests cleared when public, kept for a manager
#[tokio::test]
async fn public_view_hides_requests() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let manager = factory::create_user(db).await?;
    let (team, _) = factory::helpers::create_team_managed_by(db, &manager).await?;
    let player = factory::create_user(db).await?;
    crate::server::service::roster_request::RosterRequestService::new(db)
        .request_from_player(player.id, team.id)
        .await?;

    let service = TeamService::new(db);
    assert!(service.get(team.id, true).await?.requests.is_empty());
    assert_eq!(service.get_managed(team.id, manager.id).await?.requests.len(), 1);

    Ok(())
}
