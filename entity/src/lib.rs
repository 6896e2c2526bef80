//! SeaORM entities for the team roster store.
//!
//! Every document kind is its own table. References between documents are opaque
//! `Uuid` columns without foreign keys, and the denormalized membership caches are
//! JSON columns holding the typed snapshot lists from [`embedded`].

pub mod prelude;

pub mod archive_team;
pub mod claim_guest_request;
pub mod embedded;
pub mod one_time_passcode;
pub mod roster_request;
pub mod sea_orm_active_enums;
pub mod team;
pub mod team_designation;
pub mod user;
pub mod verification_request;
