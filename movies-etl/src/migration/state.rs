use std::fmt;

use movies_etl_shared::EntityKind;

/// Stage of a migration run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrationState {
    Idle,
    ConnectingSource,
    ConnectingTarget,
    Truncating,
    Loading(EntityKind),
    Closing,
    Done,
    Failed,
}

impl MigrationState {
    pub fn is_terminal(self) -> bool {
        matches!(self, MigrationState::Done | MigrationState::Failed)
    }
}

impl fmt::Display for MigrationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MigrationState::Idle => write!(f, "idle"),
            MigrationState::ConnectingSource => write!(f, "connecting_source"),
            MigrationState::ConnectingTarget => write!(f, "connecting_target"),
            MigrationState::Truncating => write!(f, "truncating"),
            MigrationState::Loading(kind) => write!(f, "loading({kind})"),
            MigrationState::Closing => write!(f, "closing"),
            MigrationState::Done => write!(f, "done"),
            MigrationState::Failed => write!(f, "failed"),
        }
    }
}
