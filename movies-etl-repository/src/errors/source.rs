use std::path::PathBuf;

use movies_etl_shared::{DecodeError, EntityKind};
use thiserror::Error;

/// Represents errors raised by the legacy source store.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Source store {} is unavailable: {source}", .path.display())]
    Unavailable {
        path: PathBuf,
        #[source]
        source: sqlx::Error,
    },

    #[error("Source query error: {0}")]
    Query(#[from] sqlx::Error),

    #[error(transparent)]
    Decode(#[from] RecordDecodeError),

    #[error("Source store connection is closed")]
    Closed,
}

impl SourceError {
    pub fn unavailable(path: impl Into<PathBuf>, source: sqlx::Error) -> Self {
        Self::Unavailable {
            path: path.into(),
            source,
        }
    }
}

/// A source row that could not be turned into its typed record.
///
/// `row` is the zero-based position of the row in the descending-id scan.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Failed to decode {kind} row {row}{}: {source}", id_suffix(.id))]
pub struct RecordDecodeError {
    pub kind: EntityKind,
    pub row: u64,
    pub id: Option<String>,
    #[source]
    pub source: DecodeError,
}

fn id_suffix(id: &Option<String>) -> String {
    id.as_ref().map(|id| format!(" (id {id})")).unwrap_or_default()
}
