//! Pull-based stream of decoded records for one entity kind.
use std::collections::VecDeque;

use futures::stream::{self, BoxStream, StreamExt};
use movies_etl_shared::{EntityKind, Record};

use crate::errors::SourceError;

/// Lazily yields the records of one entity kind.
///
/// Rows are pulled from the underlying cursor `batch_size` at a time and
/// handed out one by one, so at most one batch is held in memory. After an
/// error the stream yields nothing more.
pub struct RecordStream<'a> {
    kind: EntityKind,
    rows: BoxStream<'a, Result<Record, SourceError>>,
    buffer: VecDeque<Record>,
    batch_size: usize,
    exhausted: bool,
    yielded: u64,
}

impl<'a> RecordStream<'a> {
    pub fn new(
        kind: EntityKind,
        rows: BoxStream<'a, Result<Record, SourceError>>,
        batch_size: usize,
    ) -> Self {
        let batch_size = batch_size.max(1);
        Self {
            kind,
            rows,
            buffer: VecDeque::with_capacity(batch_size),
            batch_size,
            exhausted: false,
            yielded: 0,
        }
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Number of records handed out so far.
    pub fn yielded(&self) -> u64 {
        self.yielded
    }

    async fn fill(&mut self) -> Result<(), SourceError> {
        while self.buffer.len() < self.batch_size {
            match self.rows.next().await {
                Some(Ok(record)) => self.buffer.push_back(record),
                Some(Err(err)) => {
                    self.buffer.clear();
                    self.exhausted = true;
                    return Err(err);
                }
                None => {
                    self.exhausted = true;
                    break;
                }
            }
        }
        Ok(())
    }

    /// Returns the next record, or `None` once the kind is drained.
    pub async fn next(&mut self) -> Option<Result<Record, SourceError>> {
        if self.buffer.is_empty() && !self.exhausted {
            if let Err(err) = self.fill().await {
                return Some(Err(err));
            }
        }

        let record = self.buffer.pop_front()?;
        self.yielded += 1;
        Some(Ok(record))
    }

    /// Returns up to `batch_size` records, or `None` once the kind is drained.
    pub async fn next_batch(&mut self) -> Result<Option<Vec<Record>>, SourceError> {
        if self.buffer.is_empty() && !self.exhausted {
            self.fill().await?;
        }

        if self.buffer.is_empty() {
            return Ok(None);
        }

        let batch: Vec<Record> = self.buffer.drain(..).collect();
        self.yielded += batch.len() as u64;
        Ok(Some(batch))
    }

    /// Drains the remaining records.
    pub async fn collect(mut self) -> Result<Vec<Record>, SourceError> {
        let mut records = Vec::new();
        while let Some(batch) = self.next_batch().await? {
            records.extend(batch);
        }
        Ok(records)
    }
}

impl RecordStream<'static> {
    /// Builds a stream over records already in memory.
    pub fn from_records(kind: EntityKind, records: Vec<Record>, batch_size: usize) -> Self {
        Self::from_results(kind, records.into_iter().map(Ok).collect(), batch_size)
    }

    pub fn from_results(
        kind: EntityKind,
        results: Vec<Result<Record, SourceError>>,
        batch_size: usize,
    ) -> Self {
        Self::new(kind, stream::iter(results).boxed(), batch_size)
    }
}
