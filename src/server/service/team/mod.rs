//! Team lifecycle service.
//!
//! Creation, reads, search and settings live here; roster and manager changes are in
//! [`members`], and the season-ending operations (rollover, archive, delete) are in
//! [`lifecycle`].

mod lifecycle;
mod members;

use chrono::Utc;
use entity::embedded::{IdList, UserSnapshots};
use sea_orm::DatabaseConnection;
use uuid::Uuid;
use validator::Validate;

use crate::server::{
    data::{archive_team::ArchiveTeamRepository, team::TeamRepository},
    error::{roster::RosterError, AppError},
    model::team::{ArchiveTeam, CreateTeamParam, Team},
    service::membership,
    util::search::{edit_distance, rank_by, search_tokens, should_rank},
    validator::{lookup, ValidatorChain},
};

pub struct TeamService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeamService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates the first season of a new lineage with the creator as its only manager.
    ///
    /// The new id doubles as the `continuation_id`. Rosters start closed.
    ///
    /// # Returns
    /// - `Ok(Team)` - The created team
    /// - `Err(AppError::RosterErr(InvalidSeasonDate))` - Season outside the allowed years
    /// - `Err(AppError::RosterErr(TeamnameTaken))` - Another live team uses the handle
    pub async fn create(&self, user_id: Uuid, param: CreateTeamParam) -> Result<Team, AppError> {
        let param = param.normalized();
        param.validate().map_err(RosterError::from)?;

        ValidatorChain::new(self.db)
            .user_exists(user_id)
            .user_is_not_guest(user_id)
            .valid_season_dates(param.season_start, param.season_end)
            .test()
            .await?;

        let repo = TeamRepository::new(self.db);
        if repo.find_by_teamname(&param.teamname).await?.is_some() {
            return Err(RosterError::TeamnameTaken.into());
        }
        if let Some(designation_id) = param.designation {
            lookup::designation(self.db, designation_id).await?;
        }

        let id = Uuid::new_v4();
        let team = repo
            .create(Team {
                id,
                place: param.place,
                name: param.name,
                teamname: param.teamname,
                season_start: param.season_start,
                season_end: param.season_end,
                season_number: 1,
                continuation_id: id,
                roster_open: false,
                managers: UserSnapshots::default(),
                players: UserSnapshots::default(),
                requests: IdList::default(),
                designation: param.designation,
                verified: false,
                created_at: Utc::now(),
            })
            .await?;

        let user = lookup::user(self.db, user_id).await?;
        let (team, _) = membership::add_manager(self.db, team, user).await?;

        tracing::info!("User {} created team {} ({})", user_id, team.id, team.teamname);

        Ok(team)
    }

    /// Gets a live team.
    ///
    /// # Arguments
    /// - `public` - Clear the pending request queue for callers who are not managers
    pub async fn get(&self, team_id: Uuid, public: bool) -> Result<Team, AppError> {
        let mut team = lookup::team(self.db, team_id).await?;
        if public {
            team.requests = IdList::default();
        }

        Ok(team)
    }

    /// Gets a live team including its request queue, for one of its managers.
    pub async fn get_managed(&self, team_id: Uuid, user_id: Uuid) -> Result<Team, AppError> {
        ValidatorChain::new(self.db)
            .user_is_manager(user_id, team_id)
            .test()
            .await?;

        self.get(team_id, false).await
    }

    pub async fn get_archive(&self, archive_id: Uuid) -> Result<ArchiveTeam, AppError> {
        lookup::archive_team(self.db, archive_id).await
    }

    /// Gets the archived seasons of a lineage, oldest first.
    pub async fn get_history(&self, continuation_id: Uuid) -> Result<Vec<ArchiveTeam>, AppError> {
        Ok(ArchiveTeamRepository::new(self.db)
            .find_by_continuation_id(continuation_id)
            .await?)
    }

    pub async fn set_roster_open(
        &self,
        manager_id: Uuid,
        team_id: Uuid,
        open: bool,
    ) -> Result<Team, AppError> {
        ValidatorChain::new(self.db)
            .user_is_manager(manager_id, team_id)
            .test()
            .await?;

        let mut team = lookup::team(self.db, team_id).await?;
        team.roster_open = open;

        Ok(TeamRepository::new(self.db).save(team).await?)
    }

    /// Sets or clears the team's designation and refreshes member caches.
    pub async fn set_designation(
        &self,
        manager_id: Uuid,
        team_id: Uuid,
        designation: Option<Uuid>,
    ) -> Result<Team, AppError> {
        ValidatorChain::new(self.db)
            .user_is_manager(manager_id, team_id)
            .test()
            .await?;
        if let Some(designation_id) = designation {
            lookup::designation(self.db, designation_id).await?;
        }

        let mut team = lookup::team(self.db, team_id).await?;
        team.designation = designation;
        let team = TeamRepository::new(self.db).save(team).await?;
        membership::refresh_team_snapshot(self.db, &team).await?;

        Ok(team)
    }

    /// Searches live teams by place, name and teamname.
    ///
    /// Multi-word terms with more than one hit are ordered by the edit distance of the
    /// term to `"{place} {name}"` plus its distance to the teamname. Single-word terms
    /// keep store order.
    ///
    /// # Arguments
    /// - `term` - Search text, at least three characters after trimming
    /// - `roster_open` - Only teams whose roster flag matches, when provided
    pub async fn search(
        &self,
        term: &str,
        roster_open: Option<bool>,
    ) -> Result<Vec<Team>, AppError> {
        ValidatorChain::new(self.db)
            .enough_search_characters(term)
            .test()
            .await?;

        let term = term.trim();
        let teams = TeamRepository::new(self.db)
            .search(&search_tokens(term), roster_open)
            .await?;

        if !should_rank(term, teams.len()) {
            return Ok(teams);
        }

        Ok(rank_by(teams, |team| {
            edit_distance(term, &team.display_name()) + edit_distance(term, &team.teamname)
        }))
    }
}
