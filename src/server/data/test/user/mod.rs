use crate::server::{data::user::UserRepository, model::user::CreateUserParam};
use entity::embedded::TeamSnapshots;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_by_identifier;
mod save;
mod search;
