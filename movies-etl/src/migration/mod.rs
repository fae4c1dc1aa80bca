//! The migration run: a small state machine that drives the source reader and
//! the destination writer through one full truncate-and-reload.
mod driver;
mod report;
mod state;

pub use driver::MigrationDriver;
pub use report::MigrationReport;
pub use state::MigrationState;
