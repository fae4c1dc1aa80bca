//! # Movies ETL Repository
//!
//! This crate provides the two store adapters of the movies migration: a
//! read-only reader over the legacy SQLite file and a bulk writer into the
//! PostgreSQL `content` schema. Both sit behind the `RecordSource` and
//! `RecordSink` traits so the migration driver can be exercised without real
//! stores.
pub mod config;
pub mod errors;
pub mod interfaces;
pub mod postgres;
pub mod sqlite;
pub mod stream;
pub mod types;

pub use config::{qualifying_schema, SourceConfig, TargetConfig, DEFAULT_BATCH_SIZE};
pub use errors::{LoadError, RecordDecodeError, SourceError, TargetError};
pub use interfaces::{RecordSink, RecordSource};
pub use postgres::PostgresSink;
pub use sqlite::SqliteSource;
pub use stream::RecordStream;
pub use types::LoadSummary;
