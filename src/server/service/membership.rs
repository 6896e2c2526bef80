//! Dual-write helpers for the two-sided membership caches.
//!
//! Membership lives on both the team (`managers` / `players`) and the user
//! (`manager_teams` / `player_teams`). Every helper writes the team side first and the
//! user side second, using id-keyed list operations so that re-running a step after a
//! partial failure never duplicates an entry. Nothing here is transactional: a failure
//! between the two saves leaves a one-sided entry, which the validator's bidirectional
//! checks then treat as "not a member".

use entity::embedded::TeamSnapshot;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::{roster_request::RosterRequestRepository, team::TeamRepository, user::UserRepository},
    error::AppError,
    model::{team::Team, user::User},
};

pub async fn add_player(
    db: &DatabaseConnection,
    mut team: Team,
    mut user: User,
) -> Result<(Team, User), AppError> {
    team.players.push_unique(user.snapshot());
    let team = TeamRepository::new(db).save(team).await?;

    user.player_teams.push_unique(team.snapshot());
    let user = UserRepository::new(db).save(user).await?;

    Ok((team, user))
}

pub async fn remove_player(
    db: &DatabaseConnection,
    mut team: Team,
    mut user: User,
) -> Result<(Team, User), AppError> {
    team.players.remove(user.id);
    let team = TeamRepository::new(db).save(team).await?;

    user.player_teams.remove(team.id);
    let user = UserRepository::new(db).save(user).await?;

    Ok((team, user))
}

pub async fn add_manager(
    db: &DatabaseConnection,
    mut team: Team,
    mut user: User,
) -> Result<(Team, User), AppError> {
    team.managers.push_unique(user.snapshot());
    let team = TeamRepository::new(db).save(team).await?;

    user.manager_teams.push_unique(team.snapshot());
    let user = UserRepository::new(db).save(user).await?;

    Ok((team, user))
}

pub async fn remove_manager(
    db: &DatabaseConnection,
    mut team: Team,
    mut user: User,
) -> Result<(Team, User), AppError> {
    team.managers.remove(user.id);
    let team = TeamRepository::new(db).save(team).await?;

    user.manager_teams.remove(team.id);
    let user = UserRepository::new(db).save(user).await?;

    Ok((team, user))
}

/// Rewrites the team's snapshot in the caches of every listed manager and player.
///
/// Users that no longer exist are skipped.
pub async fn refresh_team_snapshot(db: &DatabaseConnection, team: &Team) -> Result<(), AppError> {
    let users = UserRepository::new(db);
    let snapshot = team.snapshot();

    let mut member_ids = team.managers.ids();
    member_ids.extend(team.players.ids());
    member_ids.sort();
    member_ids.dedup();

    for user_id in member_ids {
        let Some(mut user) = users.find_by_id(user_id).await? else {
            tracing::warn!("Skipping snapshot refresh for missing user {}", user_id);
            continue;
        };

        let managers_changed = user.manager_teams.refresh(&snapshot);
        let players_changed = user.player_teams.refresh(&snapshot);
        if managers_changed || players_changed {
            users.save(user).await?;
        }
    }

    Ok(())
}

/// Rewrites the user's snapshot in every live team listed in their caches.
///
/// Teams that no longer exist are skipped.
pub async fn refresh_user_snapshot(db: &DatabaseConnection, user: &User) -> Result<(), AppError> {
    let teams = TeamRepository::new(db);
    let snapshot = user.snapshot();

    let mut team_ids = user.manager_teams.ids();
    team_ids.extend(user.player_teams.ids());
    team_ids.sort();
    team_ids.dedup();

    for team_id in team_ids {
        let Some(mut team) = teams.find_by_id(team_id).await? else {
            continue;
        };

        let managers_changed = team.managers.refresh(&snapshot);
        let players_changed = team.players.refresh(&snapshot);
        if managers_changed || players_changed {
            teams.save(team).await?;
        }
    }

    Ok(())
}

/// Which party's queue is being discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueOwner {
    Team,
    User,
}

/// Deletes every request in a queue that is being discarded.
///
/// Each id is first removed from the counterpart's queue (the user's queue when a team
/// is discarded, the team's queue when a user is). Requests that no longer exist and
/// counterparts that no longer exist are skipped, so a queue holding stale ids never
/// aborts the purge.
pub async fn purge_requests(
    db: &DatabaseConnection,
    request_ids: &[Uuid],
    owner: QueueOwner,
) -> Result<(), AppError> {
    let requests = RosterRequestRepository::new(db);
    let users = UserRepository::new(db);
    let teams = TeamRepository::new(db);

    for &request_id in request_ids {
        let Some(request) = requests.find_by_id(request_id).await? else {
            tracing::warn!("Skipping missing roster request {}", request_id);
            continue;
        };

        match owner {
            QueueOwner::Team => match users.find_by_id(request.user_id).await? {
                Some(mut user) => {
                    if user.requests.remove(request_id) {
                        users.save(user).await?;
                    }
                }
                None => tracing::warn!(
                    "Roster request {} references missing user {}",
                    request_id,
                    request.user_id
                ),
            },
            QueueOwner::User => match teams.find_by_id(request.team_id).await? {
                Some(mut team) => {
                    if team.requests.remove(request_id) {
                        teams.save(team).await?;
                    }
                }
                None => tracing::warn!(
                    "Roster request {} references missing team {}",
                    request_id,
                    request.team_id
                ),
            },
        }

        requests.delete(request_id).await?;
    }

    Ok(())
}

/// How a retired season is written into its former members' caches.
pub struct ArchiveDistribution<'a> {
    /// Id the season had while it was live.
    pub old_team_id: Uuid,
    /// Snapshot of the archive record.
    pub archive: &'a TeamSnapshot,
    /// Snapshot of the season replacing it, if any.
    pub successor: Option<&'a TeamSnapshot>,
    /// Whether players move on to the successor.
    pub copy_players: bool,
}

/// Moves every manager and player of a retired season onto its archive record.
///
/// Managers lose the old live entry, gain the archive entry, and gain the successor
/// when there is one. Players do the same but only gain the successor when
/// `copy_players` is set. Archive appends are idempotent and missing users are skipped.
pub async fn distribute_archive(
    db: &DatabaseConnection,
    manager_ids: &[Uuid],
    player_ids: &[Uuid],
    distribution: ArchiveDistribution<'_>,
) -> Result<(), AppError> {
    let users = UserRepository::new(db);

    for &user_id in manager_ids {
        let Some(mut user) = users.find_by_id(user_id).await? else {
            tracing::warn!("Skipping archive update for missing manager {}", user_id);
            continue;
        };

        user.manager_teams.remove(distribution.old_team_id);
        user.archive_teams.push_unique(distribution.archive.clone());
        if let Some(successor) = distribution.successor {
            user.manager_teams.push_unique(successor.clone());
        }
        users.save(user).await?;
    }

    for &user_id in player_ids {
        let Some(mut user) = users.find_by_id(user_id).await? else {
            tracing::warn!("Skipping archive update for missing player {}", user_id);
            continue;
        };

        user.player_teams.remove(distribution.old_team_id);
        user.archive_teams.push_unique(distribution.archive.clone());
        if let (true, Some(successor)) = (distribution.copy_players, distribution.successor) {
            user.player_teams.push_unique(successor.clone());
        }
        users.save(user).await?;
    }

    Ok(())
}
