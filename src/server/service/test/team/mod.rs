use super::*;
use crate::server::{
    model::team::{CreateTeamParam, RolloverParam},
    service::team::TeamService,
};
use test_utils::factory::helpers::{current_year, end_of_year, start_of_year};

mod create;
mod lifecycle;
mod members;
mod rollover;
mod search;

fn season_param(year: i32) -> (chrono::DateTime<chrono::Utc>, chrono::DateTime<chrono::Utc>) {
    (start_of_year(year), end_of_year(year))
}

fn create_param(teamname: &str) -> CreateTeamParam {
    let (season_start, season_end) = season_param(current_year());
    CreateTeamParam {
        place: "Pittsburgh".to_string(),
        name: "Temper".to_string(),
        teamname: teamname.to_string(),
        season_start,
        season_end,
        designation: None,
    }
}
