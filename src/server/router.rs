use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::server::{
    controller::{auth, claim_guest_request, designation, roster_request, team, user, verification},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/user", get(auth::get_user))
        .route("/api/auth/recover", post(auth::request_password_recovery))
        .route("/api/auth/reset", post(auth::reset_password))
        .route("/api/users", post(user::signup))
        .route("/api/users/search", get(user::search_users))
        .route(
            "/api/users/me",
            put(user::update_profile).delete(user::delete_account),
        )
        .route("/api/users/me/username", put(user::change_username))
        .route("/api/users/me/password", put(user::change_password))
        .route("/api/users/me/requests", get(user::get_my_requests))
        .route("/api/users/{user_id}", get(user::get_user))
        .route("/api/teams", post(team::create_team))
        .route("/api/teams/search", get(team::search_teams))
        .route("/api/teams/join", post(team::join_with_code))
        .route(
            "/api/teams/{team_id}",
            get(team::get_team).delete(team::delete_team),
        )
        .route("/api/teams/{team_id}/managed", get(team::get_managed_team))
        .route("/api/teams/{team_id}/rollover", post(team::rollover_team))
        .route("/api/teams/{team_id}/archive", post(team::archive_team))
        .route("/api/teams/{team_id}/roster-open", put(team::set_roster_open))
        .route("/api/teams/{team_id}/designation", put(team::set_designation))
        .route("/api/teams/{team_id}/leave", post(team::leave_team))
        .route(
            "/api/teams/{team_id}/players/{user_id}",
            delete(team::remove_player),
        )
        .route("/api/teams/{team_id}/managers", post(team::add_manager))
        .route(
            "/api/teams/{team_id}/managers/{user_id}",
            delete(team::remove_manager),
        )
        .route("/api/teams/{team_id}/guests", post(team::add_guest))
        .route("/api/teams/{team_id}/join-code", post(team::create_join_code))
        .route("/api/teams/{team_id}/requests", get(team::get_team_requests))
        .route("/api/teams/{team_id}/claims", get(team::get_team_claims))
        .route(
            "/api/teams/{team_id}/verification",
            post(verification::request_verification),
        )
        .route("/api/archives/{archive_id}", get(team::get_archive_team))
        .route(
            "/api/lineages/{continuation_id}/archives",
            get(team::get_lineage_history),
        )
        .route("/api/requests/team", post(roster_request::request_from_team))
        .route(
            "/api/requests/player",
            post(roster_request::request_from_player),
        )
        .route("/api/requests/{request_id}", get(roster_request::get_request))
        .route(
            "/api/requests/{request_id}/team",
            put(roster_request::team_respond).delete(roster_request::team_delete),
        )
        .route(
            "/api/requests/{request_id}/player",
            put(roster_request::user_respond).delete(roster_request::user_delete),
        )
        .route("/api/claims", post(claim_guest_request::create_claim))
        .route(
            "/api/claims/{claim_id}/accept",
            post(claim_guest_request::accept_claim),
        )
        .route(
            "/api/claims/{claim_id}/deny",
            post(claim_guest_request::deny_claim),
        )
        .route("/api/verifications", get(verification::list_pending))
        .route(
            "/api/verifications/{request_id}/approve",
            post(verification::approve),
        )
        .route(
            "/api/verifications/{request_id}/deny",
            post(verification::deny),
        )
        .route(
            "/api/designations",
            get(designation::list_designations).post(designation::create_designation),
        )
        .route(
            "/api/designations/{designation_id}",
            get(designation::get_designation),
        )
}
