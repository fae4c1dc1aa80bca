//! Error types for the migration driver.

use std::fmt;

use movies_etl_repository::{LoadError, RecordDecodeError, SourceError, TargetError};
use movies_etl_shared::EntityKind;
use thiserror::Error;

/// Which side of the migration an error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Store {
    Source,
    Destination,
}

impl fmt::Display for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Store::Source => write!(f, "source"),
            Store::Destination => write!(f, "destination"),
        }
    }
}

/// Errors that abort a migration run.
#[derive(Error, Debug)]
pub enum MigrationError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The source store could not be opened.
    #[error(transparent)]
    SourceUnavailable { source: SourceError },

    /// A source row could not be decoded.
    #[error(transparent)]
    RecordDecode { source: RecordDecodeError },

    /// Reading the source failed for any other reason.
    #[error("Source error{}: {source}", kind_suffix(.kind))]
    SourceQuery {
        kind: Option<EntityKind>,
        #[source]
        source: SourceError,
    },

    /// The destination store could not be reached.
    #[error(transparent)]
    TargetUnavailable { source: TargetError },

    /// The destination refused a batch.
    #[error("Loading {kind} failed: {source}")]
    WriteRejected {
        kind: EntityKind,
        #[source]
        source: TargetError,
    },

    /// Writing to the destination failed for any other reason.
    #[error("Destination error{}: {source}", kind_suffix(.kind))]
    TargetQuery {
        kind: Option<EntityKind>,
        #[source]
        source: TargetError,
    },
}

fn kind_suffix(kind: &Option<EntityKind>) -> String {
    kind.map(|kind| format!(" while loading {kind}"))
        .unwrap_or_default()
}

impl MigrationError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Classifies an error raised by the source store.
    pub fn from_source(kind: Option<EntityKind>, err: SourceError) -> Self {
        match err {
            SourceError::Unavailable { .. } => Self::SourceUnavailable { source: err },
            SourceError::Decode(source) => Self::RecordDecode { source },
            other => Self::SourceQuery {
                kind,
                source: other,
            },
        }
    }

    /// Classifies an error raised by the destination store.
    pub fn from_target(kind: Option<EntityKind>, err: TargetError) -> Self {
        match (kind, err) {
            (_, err @ TargetError::Unavailable { .. }) => Self::TargetUnavailable { source: err },
            (_, TargetError::InvalidSearchPath(path)) => {
                Self::config(format!("PG_DB_SEARCH_PATH names no schema: {path}"))
            }
            (Some(kind), err @ (TargetError::WriteRejected { .. } | TargetError::KindMismatch { .. })) => {
                Self::WriteRejected { kind, source: err }
            }
            (kind, other) => Self::TargetQuery {
                kind,
                source: other,
            },
        }
    }

    /// Classifies an error raised while loading one entity kind.
    pub fn from_load(kind: EntityKind, err: LoadError) -> Self {
        match err {
            LoadError::Source(err) => Self::from_source(Some(kind), err),
            LoadError::Target(err) => Self::from_target(Some(kind), err),
        }
    }

    /// The entity kind being processed when the error occurred, if any.
    pub fn entity_kind(&self) -> Option<EntityKind> {
        match self {
            Self::RecordDecode { source } => Some(source.kind),
            Self::WriteRejected { kind, .. } => Some(*kind),
            Self::SourceQuery { kind, .. } | Self::TargetQuery { kind, .. } => *kind,
            Self::Config(_) | Self::SourceUnavailable { .. } | Self::TargetUnavailable { .. } => None,
        }
    }

    /// The store the error came from. Configuration errors have none.
    pub fn store(&self) -> Option<Store> {
        match self {
            Self::Config(_) => None,
            Self::SourceUnavailable { .. } | Self::RecordDecode { .. } | Self::SourceQuery { .. } => {
                Some(Store::Source)
            }
            Self::TargetUnavailable { .. } | Self::WriteRejected { .. } | Self::TargetQuery { .. } => {
                Some(Store::Destination)
            }
        }
    }
}
