use crate::server::{
    error::{auth::AuthError, roster::RosterError, AppError},
    validator::lookup,
};
use test_utils::{builder::TestBuilder, factory};

mod claim_guest_request;
mod roster_request;
mod team;
