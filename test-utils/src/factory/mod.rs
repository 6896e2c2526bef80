//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating roster documents with sensible
//! defaults, reducing boilerplate in tests. Because membership is denormalized on both
//! sides, the helpers in [`helpers`] write both directions of a relationship so tests
//! start from a consistent store.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let manager = factory::create_user(db).await?;
//! let team = factory::helpers::create_team_managed_by(db, &manager).await?;
//! let player = factory::create_user(db).await?;
//! factory::helpers::add_player(db, &team, &player).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let user = factory::user::UserFactory::new(db)
//!     .username("guestplayer")
//!     .guest(true)
//!     .build()
//!     .await?;
//! ```

pub mod claim_guest_request;
pub mod helpers;
pub mod roster_request;
pub mod team;
pub mod user;

pub use claim_guest_request::create_claim_guest_request;
pub use roster_request::create_roster_request;
pub use team::create_team;
pub use user::create_user;
