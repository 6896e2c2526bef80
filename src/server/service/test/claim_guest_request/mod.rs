use super::*;
use crate::server::{
    data::claim_guest_request::ClaimGuestRequestRepository,
    service::claim_guest_request::ClaimGuestRequestService,
};
use entity::sea_orm_active_enums::RequestStatus;

mod accept;
mod create;
