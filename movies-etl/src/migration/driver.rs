use std::future::Future;
use std::time::Instant;

use movies_etl_repository::{
    LoadSummary, PostgresSink, RecordSink, RecordSource, SourceError, SqliteSource, TargetError,
};
use movies_etl_shared::EntityKind;
use tracing::{error, info, instrument, warn};

use super::{MigrationReport, MigrationState};
use crate::config::MigrationConfig;
use crate::errors::MigrationError;

/// Runs one full migration from the legacy store into the destination.
///
/// The driver walks `Idle -> ConnectingSource -> ConnectingTarget ->
/// Truncating -> Loading(..) -> Closing -> Done`, or ends in `Failed`. Every
/// transition is logged and kept in [`history`](Self::history). Whatever
/// connections were opened are closed on every exit path.
pub struct MigrationDriver {
    config: MigrationConfig,
    state: MigrationState,
    history: Vec<MigrationState>,
}

impl MigrationDriver {
    pub fn new(config: MigrationConfig) -> Self {
        Self {
            config,
            state: MigrationState::Idle,
            history: vec![MigrationState::Idle],
        }
    }

    pub fn config(&self) -> &MigrationConfig {
        &self.config
    }

    pub fn state(&self) -> MigrationState {
        self.state
    }

    /// Every state the driver has been in, oldest first.
    pub fn history(&self) -> &[MigrationState] {
        &self.history
    }

    /// Migrates from the configured SQLite file into the configured PostgreSQL database.
    pub async fn run(&mut self) -> Result<MigrationReport, MigrationError> {
        let source_config = self.config.source.clone();
        let target_config = self.config.target.clone();

        self.run_with(
            async move { SqliteSource::open_read_only(&source_config).await },
            async move { PostgresSink::connect(&target_config).await },
        )
        .await
    }

    /// Migrates between the stores produced by the two connection futures.
    ///
    /// The target is only connected once the source has opened.
    #[instrument(skip_all)]
    pub async fn run_with<S, T, FS, FT>(
        &mut self,
        open_source: FS,
        open_target: FT,
    ) -> Result<MigrationReport, MigrationError>
    where
        S: RecordSource,
        T: RecordSink,
        FS: Future<Output = Result<S, SourceError>>,
        FT: Future<Output = Result<T, TargetError>>,
    {
        let started = Instant::now();

        self.transition(MigrationState::ConnectingSource);
        let mut source = match open_source.await {
            Ok(source) => source,
            Err(e) => return Err(self.fail(MigrationError::from_source(None, e))),
        };

        self.transition(MigrationState::ConnectingTarget);
        let target = match open_target.await {
            Ok(target) => target,
            Err(e) => {
                close_source(&mut source).await;
                return Err(self.fail(MigrationError::from_target(None, e)));
            }
        };

        let loads = match self.load(&mut source, &target).await {
            Ok(loads) => loads,
            Err(e) => {
                close_source(&mut source).await;
                close_target(&target).await;
                return Err(self.fail(e));
            }
        };

        self.transition(MigrationState::Closing);
        close_source(&mut source).await;
        close_target(&target).await;

        let report = MigrationReport {
            loads,
            elapsed: started.elapsed(),
        };
        self.transition(MigrationState::Done);

        info!(
            rows_read = report.rows_read(),
            rows_inserted = report.rows_inserted(),
            elapsed_ms = report.elapsed.as_millis() as u64,
            "Migration finished"
        );

        Ok(report)
    }

    async fn load<S, T>(
        &mut self,
        source: &mut S,
        target: &T,
    ) -> Result<Vec<LoadSummary>, MigrationError>
    where
        S: RecordSource,
        T: RecordSink,
    {
        self.transition(MigrationState::Truncating);
        target
            .truncate(&EntityKind::LOAD_ORDER)
            .await
            .map_err(|e| MigrationError::from_target(None, e))?;

        let mut loads = Vec::with_capacity(EntityKind::LOAD_ORDER.len());
        for kind in EntityKind::LOAD_ORDER {
            self.transition(MigrationState::Loading(kind));

            let mut records = source
                .stream(kind)
                .await
                .map_err(|e| MigrationError::from_source(Some(kind), e))?;
            let summary = target
                .bulk_insert(kind, &mut records)
                .await
                .map_err(|e| MigrationError::from_load(kind, e))?;

            info!(
                entity_kind = %kind,
                table = kind.table_name(),
                rows_read = summary.rows_read,
                rows_inserted = summary.rows_inserted,
                "Entity kind loaded"
            );
            loads.push(summary);
        }

        Ok(loads)
    }

    fn transition(&mut self, next: MigrationState) {
        info!(from = %self.state, state = %next, "Migration state changed");
        self.state = next;
        self.history.push(next);
    }

    fn fail(&mut self, err: MigrationError) -> MigrationError {
        let store = err.store().map_or_else(|| "none".to_string(), |store| store.to_string());
        let entity_kind = err
            .entity_kind()
            .map_or_else(|| "none".to_string(), |kind| kind.to_string());
        error!(
            state = %self.state,
            store = %store,
            entity_kind = %entity_kind,
            error = %err,
            "Migration failed"
        );
        self.transition(MigrationState::Failed);
        err
    }
}

async fn close_source<S: RecordSource>(source: &mut S) {
    if let Err(e) = source.close().await {
        warn!(error = %e, "Failed to close source store");
    }
}

async fn close_target<T: RecordSink>(target: &T) {
    if let Err(e) = target.close().await {
        warn!(error = %e, "Failed to close destination store");
    }
}
