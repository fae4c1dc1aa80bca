use std::time::Duration;

use movies_etl_repository::LoadSummary;

/// What a successful run moved, per entity kind in load order.
#[derive(Debug, Clone, PartialEq)]
pub struct MigrationReport {
    pub loads: Vec<LoadSummary>,
    pub elapsed: Duration,
}

impl MigrationReport {
    pub fn rows_read(&self) -> u64 {
        self.loads.iter().map(|load| load.rows_read).sum()
    }

    pub fn rows_inserted(&self) -> u64 {
        self.loads.iter().map(|load| load.rows_inserted).sum()
    }
}
