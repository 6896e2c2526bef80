//! HTTP request handlers.
//!
//! Handlers are thin: they resolve the session user through `AuthGuard`, convert DTOs
//! into service parameters, call one service operation and convert the result back
//! into a DTO. Authorization beyond "logged in" happens inside the services.

pub mod auth;
pub mod claim_guest_request;
pub mod designation;
pub mod roster_request;
pub mod team;
pub mod user;
pub mod verification;
