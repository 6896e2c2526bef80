use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Which party created a roster request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum RequestSource {
    #[sea_orm(string_value = "Player")]
    Player,
    #[sea_orm(string_value = "Team")]
    Team,
}

/// Lifecycle shared by roster, claim-guest and verification requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum RequestStatus {
    #[sea_orm(string_value = "Pending")]
    Pending,
    #[sea_orm(string_value = "Approved")]
    Approved,
    #[sea_orm(string_value = "Denied")]
    Denied,
}

/// What a one-time passcode may be redeemed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
pub enum OtpReason {
    #[sea_orm(string_value = "PasswordRecovery")]
    PasswordRecovery,
    #[sea_orm(string_value = "TeamJoin")]
    TeamJoin,
}
