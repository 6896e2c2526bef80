//! Wire-level data transfer objects.
//!
//! DTOs are the JSON shapes exchanged with clients. Field names are camelCase and the
//! enum value sets (`Player|Team`, `Pending|Approved|Denied`, `PasswordRecovery|TeamJoin`)
//! match the persisted documents. Server-side domain models convert into these at the
//! controller boundary.

pub mod api;
pub mod claim_guest_request;
pub mod designation;
pub mod passcode;
pub mod roster_request;
pub mod team;
pub mod user;
pub mod verification;
