use super::*;
use crate::server::service::roster_request::RosterRequestService;
use entity::sea_orm_active_enums::{RequestSource, RequestStatus};

mod create;
mod read;
mod respond;
