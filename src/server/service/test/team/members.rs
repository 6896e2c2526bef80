use super::*;
use crate::server::model::team::AddGuestParam;

/// Tests that a manager can remove a rostered player.
///
/// Expected: player gone from both sides
#[tokio::test]
async fn remove_player_clears_both_sides() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let manager = factory::create_user(db).await?;
    let (team, _) = factory::helpers::create_team_managed_by(db, &manager).await?;
    let player = factory::create_user(db).await?;
    factory::helpers::add_player(db, &team, &player).await?;

    let team = TeamService::new(db)
        .remove_player(manager.id, team.id, player.id)
        .await?;

    assert!(!team.players.contains(player.id));
    assert!(lookup::user(db, player.id).await?.player_teams.is_empty());

    Ok(())
}

/// Tests the target check runs before the manager check.
///
/// Expected: Err(PlayerNotOnTeam) even when the requester is not a manager
#[tokio::test]
async fn remove_player_checks_target_first() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::create_team(db).await?;
    let outsider = factory::create_user(db).await?;
    let stranger = factory::create_user(db).await?;

    let result = TeamService::new(db)
        .remove_player(outsider.id, team.id, stranger.id)
        .await;

    assert!(matches!(
        result,
        Err(AppError::RosterErr(RosterError::PlayerNotOnTeam))
    ));

    Ok(())
}

/// Tests that a player can leave on their own.
///
/// Expected: player gone from both sides
#[tokio::test]
async fn player_leaves_team() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::create_team(db).await?;
    let player = factory::create_user(db).await?;
    factory::helpers::add_player(db, &team, &player).await?;

    let player = TeamService::new(db).leave(player.id, team.id).await?;

    assert!(player.player_teams.is_empty());
    assert!(!lookup::team(db, team.id).await?.players.contains(player.id));

    Ok(())
}

/// Tests adding a co-manager and the last-manager guard on removal.
///
/// Expected: second manager added on both sides; removing them succeeds; removing the
/// last manager fails with OnlyManagerCannotLeave
#[tokio::test]
async fn manager_add_and_remove() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let manager = factory::create_user(db).await?;
    let (team, _) = factory::helpers::create_team_managed_by(db, &manager).await?;
    let candidate = factory::create_user(db).await?;
    let service = TeamService::new(db);

    let team = service.add_manager(manager.id, team.id, candidate.id).await?;
    assert!(team.managers.contains(candidate.id));
    assert!(lookup::user(db, candidate.id)
        .await?
        .manager_teams
        .contains(team.id));

    let again = service.add_manager(manager.id, team.id, candidate.id).await;
    assert!(matches!(
        again,
        Err(AppError::RosterErr(RosterError::AlreadyManages))
    ));

    service
        .remove_manager(manager.id, team.id, candidate.id)
        .await?;
    let last = service.remove_manager(manager.id, team.id, manager.id).await;
    assert!(matches!(
        last,
        Err(AppError::RosterErr(RosterError::OnlyManagerCannotLeave))
    ));

    Ok(())
}

/// Tests joining through a bulk join code.
///
/// Expected: two users join with the same code; an unknown code fails with
/// InvalidPasscode
#[tokio::test]
async fn join_with_bulk_code() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let manager = factory::create_user(db).await?;
    let (team, _) = factory::helpers::create_team_managed_by(db, &manager).await?;
    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;
    let service = TeamService::new(db);

    let passcode = service.create_bulk_join_code(manager.id, team.id).await?;
    assert_eq!(passcode.code.len(), 6);
    assert_eq!(passcode.team_id, Some(team.id));

    service.join_with_code(first.id, &passcode.code).await?;
    let team = service.join_with_code(second.id, &passcode.code).await?;
    assert!(team.players.contains(first.id));
    assert!(team.players.contains(second.id));

    let rejoin = service.join_with_code(first.id, &passcode.code).await;
    assert!(matches!(
        rejoin,
        Err(AppError::RosterErr(RosterError::PlayerAlreadyRostered))
    ));

    let bogus = if passcode.code == "000000" { "000001" } else { "000000" };
    let unknown = service.join_with_code(first.id, bogus).await;
    assert!(matches!(
        unknown,
        Err(AppError::RosterErr(RosterError::InvalidPasscode))
    ));

    Ok(())
}

/// Tests creating a guest placeholder on a roster.
///
/// Expected: guest account on the team on both sides, closed to requests, unable to log in
#[tokio::test]
async fn add_guest_rosters_placeholder() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let manager = factory::create_user(db).await?;
    let (team, _) = factory::helpers::create_team_managed_by(db, &manager).await?;

    let (team, guest) = TeamService::new(db)
        .add_guest(AddGuestParam {
            manager_id: manager.id,
            team_id: team.id,
            first_name: "Casey".to_string(),
            last_name: "Guest".to_string(),
            email_domain: "guest.invalid".to_string(),
        })
        .await?;

    assert!(guest.guest);
    assert!(!guest.open_to_requests);
    assert!(guest.username.starts_with("guest"));
    assert!(guest.email.ends_with("@guest.invalid"));
    assert!(guest.player_teams.contains(team.id));
    assert!(team.players.contains(guest.id));

    let login = crate::server::service::auth::AuthService::new(db)
        .login(&guest.username, "anything")
        .await;
    assert!(matches!(
        login,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Tests that a guest needs both names.
///
/// Expected: Err(MissingField("lastName")) for a whitespace-only last name, roster unchanged
#[tokio::test]
async fn add_guest_requires_names() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let manager = factory::create_user(db).await?;
    let (team, _) = factory::helpers::create_team_managed_by(db, &manager).await?;

    let service = TeamService::new(db);
    let result = service
        .add_guest(AddGuestParam {
            manager_id: manager.id,
            team_id: team.id,
            first_name: "Casey".to_string(),
            last_name: "  ".to_string(),
            email_domain: "guest.invalid".to_string(),
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::RosterErr(RosterError::MissingField("lastName")))
    ));
    assert!(service.get(team.id, false).await?.players.is_empty());

    Ok(())
}
