//! Shared helper utilities for factory methods.
//!
//! Provides unique value generation, snapshot builders mirroring the application's
//! embedded caches, and helpers that write both sides of a membership relationship.

use chrono::{DateTime, Datelike, TimeZone, Utc};
use entity::embedded::{TeamSnapshot, UserSnapshot};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, IntoActiveModel};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// January 1st, 00:00 UTC of the given year.
pub fn start_of_year(year: i32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

/// December 31st, 00:00 UTC of the given year.
pub fn end_of_year(year: i32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, 12, 31, 0, 0, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

/// The current calendar year in UTC.
pub fn current_year() -> i32 {
    Utc::now().year()
}

/// Builds the snapshot the application embeds for a live team.
pub fn team_snapshot(team: &entity::team::Model) -> TeamSnapshot {
    TeamSnapshot {
        id: team.id,
        place: team.place.clone(),
        name: team.name.clone(),
        teamname: team.teamname.clone(),
        season_start: team.season_start,
        season_end: team.season_end,
        season_number: team.season_number,
        verified: team.verified,
        designation: team.designation,
    }
}

/// Builds the snapshot the application embeds for a user.
pub fn user_snapshot(user: &entity::user::Model) -> UserSnapshot {
    UserSnapshot {
        id: user.id,
        username: user.username.clone(),
        first_name: user.first_name.clone(),
        last_name: user.last_name.clone(),
        guest: user.guest,
    }
}

/// Creates a team managed by `manager`, writing both `team.managers` and
/// `manager.manager_teams`.
///
/// # Returns
/// - `Ok((team, manager))` - Both documents as persisted after the dual write
/// - `Err(DbErr)` - Database error during insert or update
pub async fn create_team_managed_by(
    db: &DatabaseConnection,
    manager: &entity::user::Model,
) -> Result<(entity::team::Model, entity::user::Model), DbErr> {
    let team = crate::factory::team::TeamFactory::new(db)
        .manager(user_snapshot(manager))
        .build()
        .await?;
    let manager = link_manager(db, &team, manager).await?;

    Ok((team, manager))
}

/// Writes the user side of a manager relationship for a team that already lists
/// `manager` in `team.managers`.
pub async fn link_manager(
    db: &DatabaseConnection,
    team: &entity::team::Model,
    manager: &entity::user::Model,
) -> Result<entity::user::Model, DbErr> {
    let mut manager_teams = manager.manager_teams.clone();
    manager_teams.push_unique(team_snapshot(team));

    let mut active = manager.clone().into_active_model();
    active.manager_teams = ActiveValue::Set(manager_teams);
    active.update(db).await
}

/// Adds `player` to `team`, writing both `team.players` and `player.player_teams`.
///
/// # Returns
/// - `Ok((team, player))` - Both documents as persisted after the dual write
/// - `Err(DbErr)` - Database error during update
pub async fn add_player(
    db: &DatabaseConnection,
    team: &entity::team::Model,
    player: &entity::user::Model,
) -> Result<(entity::team::Model, entity::user::Model), DbErr> {
    let mut players = team.players.clone();
    players.push_unique(user_snapshot(player));
    let mut team_active = team.clone().into_active_model();
    team_active.players = ActiveValue::Set(players);
    let team = team_active.update(db).await?;

    let mut player_teams = player.player_teams.clone();
    player_teams.push_unique(team_snapshot(&team));
    let mut player_active = player.clone().into_active_model();
    player_active.player_teams = ActiveValue::Set(player_teams);
    let player = player_active.update(db).await?;

    Ok((team, player))
}
