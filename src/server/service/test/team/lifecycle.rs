use super::*;
use crate::server::service::roster_request::RosterRequestService;

/// Tests archiving a team without a successor.
///
/// Expected: live team gone, archive present, members hold only the archive entry and
/// pending requests are purged from the user side
#[tokio::test]
async fn archive_retires_team() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let manager = factory::create_user(db).await?;
    let (team, _) = factory::helpers::create_team_managed_by(db, &manager).await?;
    let player = factory::create_user(db).await?;
    factory::helpers::add_player(db, &team, &player).await?;
    let applicant = factory::create_user(db).await?;
    RosterRequestService::new(db)
        .request_from_player(applicant.id, team.id)
        .await?;

    let archive = TeamService::new(db).archive(manager.id, team.id).await?;

    assert_eq!(archive.id, team.id);
    assert!(!archive.roster_open);
    assert!(lookup::team(db, team.id).await.is_err());

    let manager = lookup::user(db, manager.id).await?;
    assert!(manager.manager_teams.is_empty());
    assert!(manager.archive_teams.contains(team.id));

    let player = lookup::user(db, player.id).await?;
    assert!(player.player_teams.is_empty());
    assert!(player.archive_teams.contains(team.id));

    assert!(lookup::user(db, applicant.id).await?.requests.is_empty());

    Ok(())
}

/// Tests deleting a team with a single manager.
///
/// Expected: team gone and removed from every member's caches
#[tokio::test]
async fn delete_removes_team_from_caches() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let manager = factory::create_user(db).await?;
    let (team, _) = factory::helpers::create_team_managed_by(db, &manager).await?;
    let player = factory::create_user(db).await?;
    factory::helpers::add_player(db, &team, &player).await?;

    TeamService::new(db).delete(manager.id, team.id).await?;

    assert!(lookup::team(db, team.id).await.is_err());
    assert!(lookup::user(db, manager.id).await?.manager_teams.is_empty());
    assert!(lookup::user(db, player.id).await?.player_teams.is_empty());

    Ok(())
}

/// Tests that co-managed teams cannot be deleted.
///
/// Expected: Err(MustBeOnlyManager) and the team still exists
#[tokio::test]
async fn delete_requires_sole_manager() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let manager = factory::create_user(db).await?;
    let (team, _) = factory::helpers::create_team_managed_by(db, &manager).await?;
    let co_manager = factory::create_user(db).await?;
    let service = TeamService::new(db);
    service.add_manager(manager.id, team.id, co_manager.id).await?;

    let result = service.delete(manager.id, team.id).await;

    assert!(matches!(
        result,
        Err(AppError::RosterErr(RosterError::MustBeOnlyManager))
    ));
    assert!(lookup::team(db, team.id).await.is_ok());

    Ok(())
}

/// Tests that roster flag changes are manager-only.
///
/// Expected: manager opens the roster; an outsider gets NotManager
#[tokio::test]
async fn set_roster_open_requires_manager() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let manager = factory::create_user(db).await?;
    let (team, _) = factory::helpers::create_team_managed_by(db, &manager).await?;
    let outsider = factory::create_user(db).await?;
    let service = TeamService::new(db);

    let closed = service.set_roster_open(manager.id, team.id, false).await?;
    assert!(!closed.roster_open);

    let result = service.set_roster_open(outsider.id, team.id, true).await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::NotManager { .. }))
    ));

    Ok(())
}
