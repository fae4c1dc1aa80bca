//! PostgreSQL destination store.
mod writer;

pub use writer::PostgresSink;
