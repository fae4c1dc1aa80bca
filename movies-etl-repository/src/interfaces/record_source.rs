use async_trait::async_trait;
use movies_etl_shared::EntityKind;

use crate::errors::SourceError;
use crate::stream::RecordStream;

/// Defines the interface of a store records are read from.
#[async_trait]
pub trait RecordSource: Send {
    /// Opens a lazy, descending-id stream over every record of `kind`.
    ///
    /// The stream borrows the source, so only one kind is read at a time.
    async fn stream(&mut self, kind: EntityKind) -> Result<RecordStream<'_>, SourceError>;

    /// Releases the connection. Calling it twice is a no-op.
    async fn close(&mut self) -> Result<(), SourceError>;
}
