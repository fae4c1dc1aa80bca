use std::fmt;
use std::path::PathBuf;

use sqlx::postgres::PgConnectOptions;

/// Number of source rows pulled per fetch when nothing else is configured.
pub const DEFAULT_BATCH_SIZE: usize = 100;

/// Location of the legacy SQLite store and how to page through it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceConfig {
    pub path: PathBuf,
    pub batch_size: usize,
}

impl SourceConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }
}

/// Connection parameters of the destination Postgres store.
#[derive(Clone, PartialEq, Eq)]
pub struct TargetConfig {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub user: String,
    pub password: String,
    /// Session `search_path`, possibly a comma-separated list of schemas.
    pub search_path: String,
}

impl TargetConfig {
    /// Server address and credentials. The search path is applied on connect.
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .database(&self.database)
            .username(&self.user)
            .password(&self.password)
    }

    /// Schema the destination tables are qualified with.
    pub fn schema(&self) -> Option<String> {
        qualifying_schema(&self.search_path)
    }
}

/// First schema of a search path that names a real schema.
///
/// Entries are trimmed and unquoted. `$user` and other `$` placeholders are
/// skipped since they only resolve inside the server.
pub fn qualifying_schema(search_path: &str) -> Option<String> {
    search_path
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| match entry.strip_prefix('"').and_then(|e| e.strip_suffix('"')) {
            Some(quoted) => quoted.replace("\"\"", "\""),
            None => entry.to_lowercase(),
        })
        .find(|schema| !schema.is_empty() && !schema.starts_with('$'))
}

impl fmt::Debug for TargetConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TargetConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .field("user", &self.user)
            .field("password", &"***")
            .field("search_path", &self.search_path)
            .finish()
    }
}
