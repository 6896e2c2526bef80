use super::*;
use crate::server::{
    data::{archive_team::ArchiveTeamRepository, roster_request::RosterRequestRepository},
    service::roster_request::RosterRequestService,
};
use test_utils::factory::helpers::user_snapshot;
use uuid::Uuid;

/// Rollover to next season without carrying players over.
///
/// Expected: successor has a new id, the same lineage, season 2 and no players; the
/// archive keeps the old id, season 1 and the full player list; caches are rewritten
#[tokio::test]
async fn rollover_without_players() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let manager = factory::create_user(db).await?;
    let (team, _) = factory::helpers::create_team_managed_by(db, &manager).await?;
    let player = factory::create_user(db).await?;
    factory::helpers::add_player(db, &team, &player).await?;

    let (season_start, season_end) = season_param(current_year() + 1);
    let successor = TeamService::new(db)
        .rollover(RolloverParam {
            manager_id: manager.id,
            team_id: team.id,
            copy_players: false,
            season_start,
            season_end,
        })
        .await?;

    assert_ne!(successor.id, team.id);
    assert_eq!(successor.continuation_id, team.continuation_id);
    assert_eq!(successor.season_number, 2);
    assert!(successor.players.is_empty());
    assert!(successor.managers.contains(manager.id));
    assert!(!successor.roster_open);

    let archive = lookup::archive_team(db, team.id).await?;
    assert_eq!(archive.season_number, 1);
    assert!(archive.players.contains(player.id));

    assert!(lookup::team(db, team.id).await.is_err());

    let manager = lookup::user(db, manager.id).await?;
    assert!(!manager.manager_teams.contains(team.id));
    assert!(manager.manager_teams.contains(successor.id));
    assert!(manager.archive_teams.contains(team.id));

    let player = lookup::user(db, player.id).await?;
    assert!(player.player_teams.is_empty());
    assert!(player.archive_teams.contains(team.id));

    Ok(())
}

/// Rollover carrying players over.
///
/// Expected: player listed on the successor on both sides and holding the archive
#[tokio::test]
async fn rollover_with_players() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let manager = factory::create_user(db).await?;
    let (team, _) = factory::helpers::create_team_managed_by(db, &manager).await?;
    let player = factory::create_user(db).await?;
    factory::helpers::add_player(db, &team, &player).await?;

    let (season_start, season_end) = season_param(current_year() + 1);
    let successor = TeamService::new(db)
        .rollover(RolloverParam {
            manager_id: manager.id,
            team_id: team.id,
            copy_players: true,
            season_start,
            season_end,
        })
        .await?;

    assert!(successor.players.contains(player.id));
    let player = lookup::user(db, player.id).await?;
    assert_eq!(player.player_teams.ids(), vec![successor.id]);
    assert_eq!(player.archive_teams.ids(), vec![team.id]);

    Ok(())
}

/// Tests that a queued request whose user no longer exists does not stop a rollover.
///
/// Expected: Ok, and the stale request record is deleted
#[tokio::test]
async fn rollover_tolerates_stale_request() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let manager = factory::create_user(db).await?;
    let stale = factory::create_roster_request(db, Uuid::new_v4(), Uuid::new_v4()).await?;
    let team = factory::team::TeamFactory::new(db)
        .manager(user_snapshot(&manager))
        .request(stale.id)
        .build()
        .await?;
    factory::helpers::link_manager(db, &team, &manager).await?;

    let (season_start, season_end) = season_param(current_year() + 1);
    let successor = TeamService::new(db)
        .rollover(RolloverParam {
            manager_id: manager.id,
            team_id: team.id,
            copy_players: false,
            season_start,
            season_end,
        })
        .await?;

    assert!(successor.requests.is_empty());
    assert!(RosterRequestRepository::new(db)
        .find_by_id(stale.id)
        .await?
        .is_none());

    Ok(())
}

/// Tests that a player's pending request to join is dropped by the rollover.
///
/// Expected: applicant's queue is empty, the request record is deleted and the successor
/// starts with no requests
#[tokio::test]
async fn rollover_clears_pending_player_request() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let manager = factory::create_user(db).await?;
    let (team, _) = factory::helpers::create_team_managed_by(db, &manager).await?;
    let applicant = factory::create_user(db).await?;
    let request = RosterRequestService::new(db)
        .request_from_player(applicant.id, team.id)
        .await?;
    assert!(lookup::user(db, applicant.id)
        .await?
        .requests
        .contains(request.id));

    let (season_start, season_end) = season_param(current_year() + 1);
    let successor = TeamService::new(db)
        .rollover(RolloverParam {
            manager_id: manager.id,
            team_id: team.id,
            copy_players: false,
            season_start,
            season_end,
        })
        .await?;

    assert!(successor.requests.is_empty());
    assert!(lookup::user(db, applicant.id).await?.requests.is_empty());
    assert!(RosterRequestRepository::new(db)
        .find_by_id(request.id)
        .await?
        .is_none());

    Ok(())
}

/// Tests that a new season cannot start in a year before the current one ends.
///
/// Expected: Err(SeasonStartsBeforeCurrentEnd)
#[tokio::test]
async fn rollover_rejects_overlapping_season() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let manager = factory::create_user(db).await?;
    let year = current_year();
    let team = factory::team::TeamFactory::new(db)
        .manager(user_snapshot(&manager))
        .season(start_of_year(year), end_of_year(year + 1))
        .build()
        .await?;
    factory::helpers::link_manager(db, &team, &manager).await?;

    let (season_start, season_end) = season_param(year);
    let result = TeamService::new(db)
        .rollover(RolloverParam {
            manager_id: manager.id,
            team_id: team.id,
            copy_players: false,
            season_start,
            season_end,
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::RosterErr(RosterError::SeasonStartsBeforeCurrentEnd))
    ));

    Ok(())
}

/// Tests that later rollovers leave earlier archives untouched and extend the trail.
///
/// Expected: first archive unchanged after a second rollover; history lists both seasons
#[tokio::test]
async fn archives_are_immutable_trail() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let manager = factory::create_user(db).await?;
    let (team, _) = factory::helpers::create_team_managed_by(db, &manager).await?;
    let service = TeamService::new(db);
    let (season_start, season_end) = season_param(current_year() + 1);

    let second = service
        .rollover(RolloverParam {
            manager_id: manager.id,
            team_id: team.id,
            copy_players: false,
            season_start,
            season_end,
        })
        .await?;
    let first_archive = lookup::archive_team(db, team.id).await?;

    let third = service
        .rollover(RolloverParam {
            manager_id: manager.id,
            team_id: second.id,
            copy_players: false,
            season_start,
            season_end,
        })
        .await?;
    assert_eq!(third.season_number, 3);
    assert_eq!(third.continuation_id, team.id);

    let reread = lookup::archive_team(db, team.id).await?;
    assert_eq!(reread.season_number, first_archive.season_number);
    assert_eq!(reread.archived_at, first_archive.archived_at);
    assert_eq!(reread.season_end, first_archive.season_end);

    let history = ArchiveTeamRepository::new(db)
        .find_by_continuation_id(team.id)
        .await?;
    let seasons: Vec<i32> = history.iter().map(|a| a.season_number).collect();
    assert_eq!(seasons, vec![1, 2]);
    assert_eq!(service.get_history(team.id).await?.len(), 2);

    Ok(())
}
