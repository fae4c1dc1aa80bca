//! Traits decoupling the migration driver from the concrete stores.
mod record_sink;
mod record_source;

pub use record_sink::RecordSink;
pub use record_source::RecordSource;
