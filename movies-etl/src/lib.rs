//! # Movies ETL
//!
//! One-shot migration of the legacy movie catalogue from a single-file SQLite
//! database into the PostgreSQL `content` schema.
//!
//! ## Architecture
//!
//! 1. **Source**: streams typed records out of SQLite, newest id first
//! 2. **Sink**: truncates the destination and bulk-loads each entity kind
//! 3. **Driver**: walks both stores through the run and closes them on every exit path
//!
//! ## Modules
//!
//! - [`config`]: Environment configuration
//! - [`migration`]: The driver state machine and its report
//! - [`errors`]: Error types for a migration run

pub mod config;
pub mod errors;
pub mod migration;

pub use config::MigrationConfig;
pub use errors::{MigrationError, Store};
pub use migration::{MigrationDriver, MigrationReport, MigrationState};
