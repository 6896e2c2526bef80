//! Small helpers shared by services and validators.

pub mod credentials;
pub mod search;
