//! Error types for the movies ETL repository.
//! Consolidates and re-exports the errors of the source reader and target writer.
mod source;
mod target;

pub use source::{RecordDecodeError, SourceError};
pub use target::TargetError;

use thiserror::Error;

/// Errors raised while draining a record stream into the destination.
///
/// A bulk insert can fail on either side: the stream can hit a row it cannot
/// decode, or the destination can refuse the batch.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error(transparent)]
    Target(#[from] TargetError),
}
