use entity::embedded::TeamSnapshot;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User as returned to clients.
///
/// `email` and `requests` are omitted from public projections.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub private: bool,
    pub open_to_requests: bool,
    pub guest: bool,
    pub player_teams: Vec<TeamSnapshot>,
    pub manager_teams: Vec<TeamSnapshot>,
    pub archive_teams: Vec<TeamSnapshot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requests: Option<Vec<Uuid>>,
    pub stats: Vec<Uuid>,
}

/// Minimal user fields embedded in request listings.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UserSummaryDto {
    pub id: Uuid,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SignupDto {
    pub email: String,
    pub username: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct LoginDto {
    /// Email or username.
    pub identifier: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileDto {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub private: Option<bool>,
    pub open_to_requests: Option<bool>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ChangeUsernameDto {
    pub username: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordDto {
    pub old_password: String,
    pub new_password: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PasswordRecoveryDto {
    pub email: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordDto {
    pub email: String,
    pub code: String,
    pub new_password: String,
}
