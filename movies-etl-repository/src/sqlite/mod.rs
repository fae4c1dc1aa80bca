//! Read-only access to the legacy SQLite store.
mod raw_row;
mod reader;

pub use reader::SqliteSource;
