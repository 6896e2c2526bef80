use crate::server::{
    data::one_time_passcode::OneTimePasscodeRepository, model::passcode::CreatePasscodeParam,
};
use chrono::{Duration, Utc};
use entity::sea_orm_active_enums::OtpReason;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
