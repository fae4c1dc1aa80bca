use std::collections::HashMap;
use std::path::PathBuf;

use async_trait::async_trait;
use futures::{Stream, StreamExt, TryStreamExt};
use movies_etl_shared::{decode_record, EntityKind, Record, TemporalDecoders};
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::{ConnectOptions, Connection};
use tracing::{debug, info, instrument, warn};

use super::raw_row::raw_row;
use crate::config::SourceConfig;
use crate::errors::{RecordDecodeError, SourceError};
use crate::interfaces::RecordSource;
use crate::stream::RecordStream;

/// Reads entity records out of the legacy SQLite database.
///
/// Holds a single read-only connection. Each call to `stream` borrows it
/// mutably, so only one cursor is ever open.
pub struct SqliteSource {
    conn: Option<SqliteConnection>,
    path: PathBuf,
    batch_size: usize,
    decoders: TemporalDecoders,
}

impl SqliteSource {
    /// Opens the database file without ever creating or writing to it.
    ///
    /// The open is followed by a query on `sqlite_master`, so a file that
    /// exists but is not a SQLite database fails here rather than on the
    /// first read.
    #[instrument(skip_all, fields(path = %config.path.display()))]
    pub async fn open_read_only(config: &SourceConfig) -> Result<Self, SourceError> {
        let options = SqliteConnectOptions::new()
            .filename(&config.path)
            .read_only(true)
            .create_if_missing(false);

        let mut conn = options
            .connect()
            .await
            .map_err(|e| SourceError::unavailable(&config.path, e))?;

        if let Err(e) = sqlx::query_scalar::<_, i64>("SELECT count(*) FROM sqlite_master")
            .fetch_one(&mut conn)
            .await
        {
            if let Err(close_err) = conn.close().await {
                warn!(error = %close_err, "Failed to close rejected source connection");
            }
            return Err(SourceError::unavailable(&config.path, e));
        }

        info!("Opened source store");

        Ok(Self {
            conn: Some(conn),
            path: config.path.clone(),
            batch_size: config.batch_size.max(1),
            decoders: TemporalDecoders::standard(),
        })
    }

    /// Replaces the temporal decoder registry.
    pub fn with_decoders(mut self, decoders: TemporalDecoders) -> Self {
        self.decoders = decoders;
        self
    }

    pub fn is_closed(&self) -> bool {
        self.conn.is_none()
    }
}

async fn declared_types(
    conn: &mut SqliteConnection,
    table: &str,
) -> Result<HashMap<String, String>, sqlx::Error> {
    let columns: Vec<(String, String)> =
        sqlx::query_as("SELECT name, type FROM pragma_table_info(?1)")
            .bind(table)
            .fetch_all(&mut *conn)
            .await?;

    Ok(columns.into_iter().collect())
}

fn decode_rows<'a>(
    conn: &'a mut SqliteConnection,
    kind: EntityKind,
    declared_types: HashMap<String, String>,
    decoders: &'a TemporalDecoders,
) -> impl Stream<Item = Result<Record, SourceError>> + Send + 'a {
    let sql = format!(
        "SELECT {} FROM {} ORDER BY id DESC",
        kind.source_columns(),
        kind.table_name()
    );

    async_stream::try_stream! {
        let mut rows = sqlx::query(&sql).fetch(conn);
        let mut position: u64 = 0;

        while let Some(row) = rows.try_next().await? {
            let raw = raw_row(&row, &declared_types)?;
            let record = decode_record(kind, &raw, decoders).map_err(|source| {
                RecordDecodeError {
                    kind,
                    row: position,
                    id: raw.id_text(),
                    source,
                }
            })?;
            position += 1;
            yield record;
        }

        debug!(%kind, rows = position, "Source scan finished");
    }
}

#[async_trait]
impl RecordSource for SqliteSource {
    #[instrument(skip(self))]
    async fn stream(&mut self, kind: EntityKind) -> Result<RecordStream<'_>, SourceError> {
        let conn = self.conn.as_mut().ok_or(SourceError::Closed)?;
        let declared = declared_types(conn, kind.table_name()).await?;

        debug!(batch_size = self.batch_size, "Streaming source table");

        let rows = decode_rows(conn, kind, declared, &self.decoders);
        Ok(RecordStream::new(kind, rows.boxed(), self.batch_size))
    }

    async fn close(&mut self) -> Result<(), SourceError> {
        if let Some(conn) = self.conn.take() {
            conn.close().await?;
            info!(path = %self.path.display(), "Closed source store");
        }
        Ok(())
    }
}
