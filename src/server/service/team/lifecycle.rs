//! Season-ending operations.
//!
//! Rollover and archive replace a live team with an archive record and rewrite every
//! member's caches. The steps run in a fixed order with idempotent list operations and
//! no transaction. A rollover racing a request acceptance on the same team can leave
//! the accepted player on the archived season only.

use chrono::Utc;
use uuid::Uuid;

use crate::server::{
    data::{archive_team::ArchiveTeamRepository, team::TeamRepository, user::UserRepository},
    error::AppError,
    model::team::{ArchiveTeam, RolloverParam, Team},
    service::{
        membership::{self, ArchiveDistribution, QueueOwner},
        team::TeamService,
    },
    validator::{lookup, ValidatorChain},
};

impl<'a> TeamService<'a> {
    /// Closes the current season and opens the next one under a new id.
    ///
    /// The live record is archived under its current id, its pending requests are
    /// purged, and a successor sharing the `continuation_id` is saved with the next
    /// `season_number`. Managers move to the successor; players only move when
    /// `copy_players` is set. Everyone gains the archive in `archive_teams`.
    ///
    /// # Returns
    /// - `Ok(Team)` - The successor season
    /// - `Err(AppError::AuthErr(NotManager))` - Requester does not manage the team
    /// - `Err(AppError::RosterErr(InvalidSeasonDate))` - New season outside the allowed years
    /// - `Err(AppError::RosterErr(SeasonStartsBeforeCurrentEnd))` - New season starts in an
    ///   earlier year than the current one ends
    pub async fn rollover(&self, param: RolloverParam) -> Result<Team, AppError> {
        ValidatorChain::new(self.db)
            .user_is_manager(param.manager_id, param.team_id)
            .valid_season_dates(param.season_start, param.season_end)
            .season_follows_current(param.team_id, param.season_start)
            .test()
            .await?;

        let mut team = lookup::team(self.db, param.team_id).await?;
        team.roster_open = false;
        let archive = self.archive_copy(&team).await?;

        let old_id = team.id;
        let old_requests = std::mem::take(&mut team.requests);
        let manager_ids = team.managers.ids();
        let player_ids = team.players.ids();

        let mut successor = team;
        successor.id = Uuid::new_v4();
        if !param.copy_players {
            successor.players = Default::default();
        }
        successor.season_start = param.season_start;
        successor.season_end = param.season_end;
        successor.season_number += 1;
        successor.created_at = Utc::now();

        membership::purge_requests(self.db, &old_requests.0, QueueOwner::Team).await?;

        let teams = TeamRepository::new(self.db);
        teams.delete(old_id).await?;
        let successor = teams.create(successor).await?;

        let archive_snapshot = archive.snapshot();
        let successor_snapshot = successor.snapshot();
        membership::distribute_archive(
            self.db,
            &manager_ids,
            &player_ids,
            ArchiveDistribution {
                old_team_id: old_id,
                archive: &archive_snapshot,
                successor: Some(&successor_snapshot),
                copy_players: param.copy_players,
            },
        )
        .await?;

        tracing::info!(
            "Rolled team {} over to {} (season {}, lineage {})",
            old_id,
            successor.id,
            successor.season_number,
            successor.continuation_id
        );

        Ok(successor)
    }

    /// Retires the team without opening another season.
    ///
    /// Runs the same request purge and cache rewrite as [`Self::rollover`], leaving
    /// only the archive record behind.
    pub async fn archive(&self, manager_id: Uuid, team_id: Uuid) -> Result<ArchiveTeam, AppError> {
        ValidatorChain::new(self.db)
            .user_is_manager(manager_id, team_id)
            .test()
            .await?;

        let mut team = lookup::team(self.db, team_id).await?;
        team.roster_open = false;
        let archive = self.archive_copy(&team).await?;

        membership::purge_requests(self.db, &team.requests.0, QueueOwner::Team).await?;
        TeamRepository::new(self.db).delete(team.id).await?;

        let archive_snapshot = archive.snapshot();
        membership::distribute_archive(
            self.db,
            &team.managers.ids(),
            &team.players.ids(),
            ArchiveDistribution {
                old_team_id: team.id,
                archive: &archive_snapshot,
                successor: None,
                copy_players: false,
            },
        )
        .await?;

        tracing::info!("Archived team {} ({})", team.id, team.teamname);

        Ok(archive)
    }

    /// Deletes the team outright, without keeping an archive record.
    ///
    /// Only a sole manager may delete a team.
    ///
    /// # Returns
    /// - `Ok(())` - Team deleted and removed from every member's caches
    /// - `Err(AppError::AuthErr(NotManager))` - Requester does not manage the team
    /// - `Err(AppError::RosterErr(MustBeOnlyManager))` - The team has co-managers
    pub async fn delete(&self, manager_id: Uuid, team_id: Uuid) -> Result<(), AppError> {
        ValidatorChain::new(self.db)
            .user_is_manager(manager_id, team_id)
            .team_has_single_manager(team_id)
            .test()
            .await?;

        let team = lookup::team(self.db, team_id).await?;
        let users = UserRepository::new(self.db);

        let mut member_ids = team.managers.ids();
        member_ids.extend(team.players.ids());
        member_ids.sort();
        member_ids.dedup();

        for user_id in member_ids {
            let Some(mut user) = users.find_by_id(user_id).await? else {
                tracing::warn!("Skipping cache cleanup for missing user {}", user_id);
                continue;
            };

            let managed = user.manager_teams.remove(team.id);
            let played = user.player_teams.remove(team.id);
            if managed || played {
                users.save(user).await?;
            }
        }

        membership::purge_requests(self.db, &team.requests.0, QueueOwner::Team).await?;
        TeamRepository::new(self.db).delete(team.id).await?;

        tracing::info!("User {} deleted team {}", manager_id, team.id);

        Ok(())
    }

    /// Writes the archive record for the team's current id.
    ///
    /// Re-running returns the record written the first time.
    async fn archive_copy(&self, team: &Team) -> Result<ArchiveTeam, AppError> {
        Ok(ArchiveTeamRepository::new(self.db)
            .create(team.to_archive(Utc::now()))
            .await?)
    }
}
