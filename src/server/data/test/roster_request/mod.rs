use crate::server::data::roster_request::RosterRequestRepository;
use entity::sea_orm_active_enums::{RequestSource, RequestStatus};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_pending_for_pair;
