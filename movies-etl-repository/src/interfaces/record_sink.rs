use async_trait::async_trait;
use movies_etl_shared::EntityKind;

use crate::errors::{LoadError, TargetError};
use crate::stream::RecordStream;
use crate::types::LoadSummary;

/// Defines the interface of a store records are written to.
#[async_trait]
pub trait RecordSink: Send + Sync {
    /// Empties the tables of `kinds` in a single statement.
    async fn truncate(&self, kinds: &[EntityKind]) -> Result<(), TargetError>;

    /// Drains `records` into the table of `kind` inside one transaction.
    ///
    /// Records whose id already exists are skipped. Any failure rolls back
    /// everything written for this call.
    async fn bulk_insert(
        &self,
        kind: EntityKind,
        records: &mut RecordStream<'_>,
    ) -> Result<LoadSummary, LoadError>;

    async fn close(&self) -> Result<(), TargetError>;
}
