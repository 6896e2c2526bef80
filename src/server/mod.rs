//! Team roster backend.
//!
//! Users, teams, season rollovers and the request workflows that move players onto
//! rosters. The backend uses Axum for HTTP, SeaORM over SQLite for persistence and
//! tower-sessions for login state.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP handlers and DTO conversion
//! - **Service Layer** (`service/`) - Roster operations; keeps both sides of every
//!   denormalized relationship in step
//! - **Validator Layer** (`validator/`) - Precondition chains run before each mutation
//! - **Data Layer** (`data/`) - Repositories converting entities to domain models
//! - **Model Layer** (`model/`) - Domain models and operation parameter types
//! - **Error Layer** (`error/`) - Error taxonomy and HTTP response mapping
//! - **Middleware** (`middleware/`) - Session wrapper and authentication guard
//!
//! Supporting modules: `config` (environment configuration), `state` (shared handler
//! state), `startup` (database and session setup), `router` (route table) and
//! `scheduler/` (cron jobs).
//!
//! # Request Flow
//!
//! 1. **Router** dispatches the request to a controller
//! 2. **Controller** resolves the session user and converts the DTO into params
//! 3. **Service** runs its validator chain, then reads and writes documents
//! 4. **Controller** converts the returned domain model into a DTO

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
pub mod validator;
