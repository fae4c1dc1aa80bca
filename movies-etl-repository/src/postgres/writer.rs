//! PostgreSQL implementation of the record sink.
//!
//! Writes each entity kind inside its own transaction using multi-row
//! `INSERT ... ON CONFLICT (id) DO NOTHING` statements built with
//! `sqlx::QueryBuilder`. Existing rows are left untouched.
use std::time::Duration;

use async_trait::async_trait;
use movies_etl_shared::{ColumnValue, EntityKind, Record};
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use sqlx::{Postgres, QueryBuilder, Transaction};
use tracing::{debug, info, instrument};

use crate::config::{qualifying_schema, TargetConfig};
use crate::errors::{LoadError, TargetError};
use crate::interfaces::RecordSink;
use crate::stream::RecordStream;
use crate::types::LoadSummary;

/// Upper bound on bind parameters in one PostgreSQL statement.
const MAX_BIND_PARAMS: usize = 65_535;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// PostgreSQL implementation of the record sink.
///
/// Every table is addressed as `"<schema>"."<table>"`, where `schema` is the
/// first schema of the configured search path.
pub struct PostgresSink {
    pool: PgPool,
    schema: String,
}

impl PostgresSink {
    /// Connects a single-connection pool to the destination.
    ///
    /// # Arguments
    ///
    /// * `config` - Destination host, credentials and search path
    ///
    /// # Returns
    ///
    /// * `Ok(PostgresSink)` - Connected sink
    /// * `Err(TargetError::Unavailable)` - The server could not be reached or refused the login
    /// * `Err(TargetError::InvalidSearchPath)` - The search path names no usable schema
    pub async fn connect(config: &TargetConfig) -> Result<Self, TargetError> {
        Self::connect_with(config.connect_options(), &config.search_path).await
    }

    /// Connects with prepared connect options, setting the session search path.
    ///
    /// Tables are qualified with the first schema of `search_path`.
    #[instrument(skip_all, fields(host = %options.get_host(), port = options.get_port(), search_path = %search_path))]
    pub async fn connect_with(
        options: PgConnectOptions,
        search_path: &str,
    ) -> Result<Self, TargetError> {
        let schema = qualifying_schema(search_path)
            .ok_or_else(|| TargetError::InvalidSearchPath(search_path.to_string()))?;

        let host = options.get_host().to_string();
        let port = options.get_port();
        let database = options.get_database().unwrap_or_default().to_string();

        let pool = PgPoolOptions::new()
            .max_connections(1)
            .acquire_timeout(CONNECT_TIMEOUT)
            .connect_with(options.options([("search_path", search_path)]))
            .await
            .map_err(|source| TargetError::Unavailable {
                host,
                port,
                database,
                source,
            })?;

        info!(schema = %schema, "Connected to destination store");

        Ok(Self::new(pool, schema))
    }

    /// Wraps an existing pool.
    pub fn new(pool: PgPool, schema: impl Into<String>) -> Self {
        Self {
            pool,
            schema: schema.into(),
        }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    fn qualified(&self, kind: EntityKind) -> String {
        format!("{}.{}", quote_ident(&self.schema), quote_ident(kind.table_name()))
    }

    /// Inserts one batch within an active transaction.
    ///
    /// Batches larger than the bind parameter limit are split into several
    /// statements. Returns the number of rows actually inserted.
    async fn insert_batch_tx(
        &self,
        kind: EntityKind,
        records: &[Record],
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<u64, TargetError> {
        if let Some(record) = records.iter().find(|record| record.kind() != kind) {
            return Err(TargetError::KindMismatch {
                expected: kind,
                found: record.kind(),
            });
        }

        let columns = kind.destination_columns();
        let chunk_size = (MAX_BIND_PARAMS / columns.len()).max(1);
        let insert = format!(
            "INSERT INTO {} ({}) ",
            self.qualified(kind),
            columns.join(", ")
        );

        let mut inserted = 0;
        for chunk in records.chunks(chunk_size) {
            let mut query_builder = QueryBuilder::<Postgres>::new(&insert);
            query_builder.push_values(chunk, |mut b, record| {
                for value in record.values() {
                    match value {
                        ColumnValue::Uuid(value) => b.push_bind(value),
                        ColumnValue::Text(value) => b.push_bind(value),
                        ColumnValue::Timestamp(value) => b.push_bind(value),
                        ColumnValue::Date(value) => b.push_bind(value),
                        ColumnValue::Float(value) => b.push_bind(value),
                    };
                }
            });
            query_builder.push(" ON CONFLICT (id) DO NOTHING");

            let result = query_builder
                .build()
                .execute(&mut **tx)
                .await
                .map_err(|e| TargetError::from_write(kind, e))?;
            inserted += result.rows_affected();
        }

        Ok(inserted)
    }
}

/// Quotes an identifier, doubling embedded quotes.
fn quote_ident(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}

#[async_trait]
impl RecordSink for PostgresSink {
    #[instrument(skip(self))]
    async fn truncate(&self, kinds: &[EntityKind]) -> Result<(), TargetError> {
        if kinds.is_empty() {
            return Ok(());
        }

        let tables: Vec<String> = kinds.iter().map(|kind| self.qualified(*kind)).collect();
        let sql = format!("TRUNCATE TABLE {}", tables.join(", "));

        let mut tx = self.pool.begin().await.map_err(TargetError::database)?;
        sqlx::query(&sql)
            .execute(&mut *tx)
            .await
            .map_err(TargetError::database)?;
        tx.commit().await.map_err(TargetError::database)?;

        info!(tables = kinds.len(), "Truncated destination tables");
        Ok(())
    }

    #[instrument(skip(self, records))]
    async fn bulk_insert(
        &self,
        kind: EntityKind,
        records: &mut RecordStream<'_>,
    ) -> Result<LoadSummary, LoadError> {
        if records.kind() != kind {
            return Err(TargetError::KindMismatch {
                expected: kind,
                found: records.kind(),
            }
            .into());
        }

        let mut tx = self.pool.begin().await.map_err(TargetError::database)?;
        let mut summary = LoadSummary::empty(kind);

        // Returning early drops `tx`, which rolls back everything written for this kind.
        while let Some(batch) = records.next_batch().await? {
            let inserted = self.insert_batch_tx(kind, &batch, &mut tx).await?;
            summary.rows_read += batch.len() as u64;
            summary.rows_inserted += inserted;
            debug!(
                batch = batch.len(),
                inserted,
                rows_read = summary.rows_read,
                "Inserted batch"
            );
        }

        tx.commit()
            .await
            .map_err(|e| TargetError::from_write(kind, e))?;

        info!(
            rows_read = summary.rows_read,
            rows_inserted = summary.rows_inserted,
            "Loaded {}",
            kind
        );
        Ok(summary)
    }

    async fn close(&self) -> Result<(), TargetError> {
        if !self.pool.is_closed() {
            self.pool.close().await;
            info!("Closed destination store");
        }
        Ok(())
    }
}
