use movies_etl_shared::EntityKind;

/// Outcome of loading one entity kind into the destination.
///
/// `rows_inserted` can be lower than `rows_read` when some ids already existed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadSummary {
    pub kind: EntityKind,
    pub rows_read: u64,
    pub rows_inserted: u64,
}

impl LoadSummary {
    pub fn empty(kind: EntityKind) -> Self {
        Self {
            kind,
            rows_read: 0,
            rows_inserted: 0,
        }
    }

    pub fn rows_skipped(&self) -> u64 {
        self.rows_read.saturating_sub(self.rows_inserted)
    }
}
