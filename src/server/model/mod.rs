//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Parameter types carry the inputs of
//! a single service operation.

pub mod claim_guest_request;
pub mod designation;
pub mod passcode;
pub mod roster_request;
pub mod team;
pub mod user;
pub mod verification;
