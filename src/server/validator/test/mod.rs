use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, roster::RosterError, AppError},
    validator::ValidatorChain,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
