use movies_etl_shared::EntityKind;
use sqlx::error::ErrorKind;
use thiserror::Error;

/// Represents errors raised by the destination store.
#[derive(Debug, Error)]
pub enum TargetError {
    #[error("Destination store {host}:{port}/{database} is unavailable: {source}")]
    Unavailable {
        host: String,
        port: u16,
        database: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("Write to `{table}` rejected{}: {message}", constraint_suffix(.constraint))]
    WriteRejected {
        table: &'static str,
        constraint: Option<String>,
        message: String,
    },

    #[error("Search path `{0}` names no schema to write to")]
    InvalidSearchPath(String),

    #[error("Expected {expected} records, got a {found} record")]
    KindMismatch {
        expected: EntityKind,
        found: EntityKind,
    },

    #[error("Database error: {0}")]
    Database(#[source] sqlx::Error),

    #[error("Destination store connection is closed")]
    Closed,
}

impl TargetError {
    /// Classifies a database error raised while writing `kind`.
    ///
    /// Constraint violations other than the skipped primary-key conflict become
    /// `WriteRejected`.
    pub fn from_write(kind: EntityKind, err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(ref db)
                if matches!(
                    db.kind(),
                    ErrorKind::CheckViolation
                        | ErrorKind::NotNullViolation
                        | ErrorKind::ForeignKeyViolation
                        | ErrorKind::UniqueViolation
                ) =>
            {
                Self::WriteRejected {
                    table: kind.table_name(),
                    constraint: db.constraint().map(str::to_string),
                    message: db.message().to_string(),
                }
            }
            other => Self::database(other),
        }
    }

    pub fn database(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolClosed => Self::Closed,
            other => Self::Database(other),
        }
    }
}

fn constraint_suffix(constraint: &Option<String>) -> String {
    constraint
        .as_ref()
        .map(|name| format!(" by `{name}`"))
        .unwrap_or_default()
}
