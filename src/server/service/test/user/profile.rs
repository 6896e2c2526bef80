use super::*;

/// Tests that name changes reach the snapshots held by teams.
///
/// Expected: the team's player entry carries the new name
#[tokio::test]
async fn update_profile_refreshes_team_snapshots() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::create_team(db).await?;
    let player = factory::create_user(db).await?;
    factory::helpers::add_player(db, &team, &player).await?;

    let updated = UserService::new(db)
        .update_profile(
            player.id,
            UpdateProfileParam {
                first_name: Some("Morgan".to_string()),
                open_to_requests: Some(false),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.first_name, "Morgan");
    assert!(!updated.open_to_requests);

    let team = lookup::team(db, team.id).await?;
    let entry = team.players.0.iter().find(|p| p.id == player.id);
    assert_eq!(entry.map(|p| p.first_name.as_str()), Some("Morgan"));

    Ok(())
}

/// Tests renaming the account handle.
///
/// Expected: UsernameTaken for another user's handle; a free handle reaches team caches
#[tokio::test]
async fn change_username_is_unique_and_propagated() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let manager = factory::create_user(db).await?;
    let (team, _) = factory::helpers::create_team_managed_by(db, &manager).await?;
    let other = factory::create_user(db).await?;
    let service = UserService::new(db);

    assert!(matches!(
        service.change_username(manager.id, &other.username).await,
        Err(AppError::RosterErr(RosterError::UsernameTaken))
    ));

    service.change_username(manager.id, "captain").await?;
    let team = lookup::team(db, team.id).await?;
    assert_eq!(team.managers.0[0].username, "captain");

    Ok(())
}
