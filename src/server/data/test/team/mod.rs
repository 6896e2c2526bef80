use crate::server::{data::team::TeamRepository, model::team::Team};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod search;
