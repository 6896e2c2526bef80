//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. Every mutating operation
//! first runs a [`ValidatorChain`](crate::server::validator::ValidatorChain) over the
//! documents it touches, then performs its writes as an ordered sequence of idempotent
//! steps. Nothing here runs inside a database transaction.
//!
//! Services borrow the database connection and are cheap to construct per request.

pub mod auth;
pub mod claim_guest_request;
pub mod designation;
pub mod mailer;
pub mod membership;
pub mod passcode;
pub mod roster_request;
pub mod team;
pub mod user;
pub mod verification;

#[cfg(test)]
mod test;
