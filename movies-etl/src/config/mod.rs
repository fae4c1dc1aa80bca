//! Migration configuration, read once from the environment.

use std::env;
use std::path::{Path, PathBuf};

use movies_etl_repository::{qualifying_schema, SourceConfig, TargetConfig, DEFAULT_BATCH_SIZE};
use tracing::info;

use crate::errors::MigrationError;

/// Default destination port.
const DEFAULT_PG_PORT: u16 = 5432;

/// Default destination search path.
const DEFAULT_SEARCH_PATH: &str = "content";

/// Everything a migration run needs to know about both stores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationConfig {
    pub source: SourceConfig,
    pub target: TargetConfig,
}

impl MigrationConfig {
    /// Builds the configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `DB_PATH`: source SQLite file, relative to the working directory (required)
    /// - `PG_HOST`: destination host (required)
    /// - `PG_DB_PORT`: destination port (default: 5432)
    /// - `PG_DB_NAME`: destination database (required)
    /// - `PG_DB_USER`: destination user (required)
    /// - `PG_DB_PASSWORD`: destination password (required)
    /// - `PG_DB_SEARCH_PATH`: destination search path, one schema or a list (default: content)
    /// - `SOURCE_BATCH_SIZE`: rows fetched per source read (default: 100)
    pub fn from_env() -> Result<Self, MigrationError> {
        let base_dir = env::current_dir()
            .map_err(|e| MigrationError::config(format!("Cannot resolve working directory: {e}")))?;
        let config = Self::from_vars(|name| env::var(name).ok(), &base_dir)?;

        info!(
            db_path = %config.source.path.display(),
            pg_host = %config.target.host,
            pg_port = config.target.port,
            pg_database = %config.target.database,
            search_path = %config.target.search_path,
            batch_size = config.source.batch_size,
            "Loaded migration configuration"
        );

        Ok(config)
    }

    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_vars<F>(lookup: F, base_dir: &Path) -> Result<Self, MigrationError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let required = |name: &str| var(name).ok_or_else(|| MigrationError::config(format!("{name} must be set")));

        let db_path = PathBuf::from(required("DB_PATH")?);
        let db_path = if db_path.is_absolute() {
            db_path
        } else {
            base_dir.join(db_path)
        };

        let port = match var("PG_DB_PORT") {
            Some(port) => port
                .trim()
                .parse::<u16>()
                .map_err(|_| MigrationError::config(format!("PG_DB_PORT is not a valid port: {port}")))?,
            None => DEFAULT_PG_PORT,
        };

        let batch_size = match var("SOURCE_BATCH_SIZE") {
            Some(size) => match size.trim().parse::<usize>() {
                Ok(size) if size > 0 => size,
                _ => {
                    return Err(MigrationError::config(format!(
                        "SOURCE_BATCH_SIZE must be a positive integer: {size}"
                    )))
                }
            },
            None => DEFAULT_BATCH_SIZE,
        };

        let search_path =
            var("PG_DB_SEARCH_PATH").unwrap_or_else(|| DEFAULT_SEARCH_PATH.to_string());
        if qualifying_schema(&search_path).is_none() {
            return Err(MigrationError::config(format!(
                "PG_DB_SEARCH_PATH names no schema: {search_path}"
            )));
        }

        let target = TargetConfig {
            host: required("PG_HOST")?,
            port,
            database: required("PG_DB_NAME")?,
            user: required("PG_DB_USER")?,
            password: required("PG_DB_PASSWORD")?,
            search_path,
        };

        Ok(Self {
            source: SourceConfig::new(db_path).with_batch_size(batch_size),
            target,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use serial_test::serial;

    use super::*;

    const REQUIRED: &[(&str, &str)] = &[
        ("DB_PATH", "db.sqlite"),
        ("PG_HOST", "localhost"),
        ("PG_DB_NAME", "movies_database"),
        ("PG_DB_USER", "app"),
        ("PG_DB_PASSWORD", "123qwe"),
    ];

    fn vars(overrides: &[(&str, &str)]) -> HashMap<String, String> {
        REQUIRED
            .iter()
            .chain(overrides)
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn build(vars: &HashMap<String, String>) -> Result<MigrationConfig, MigrationError> {
        MigrationConfig::from_vars(|name| vars.get(name).cloned(), Path::new("/srv/etl"))
    }

    #[test]
    fn test_defaults() {
        let config = build(&vars(&[])).unwrap();

        assert_eq!(config.source.path, PathBuf::from("/srv/etl/db.sqlite"));
        assert_eq!(config.source.batch_size, 100);
        assert_eq!(config.target.port, 5432);
        assert_eq!(config.target.search_path, "content");
        assert_eq!(config.target.password, "123qwe");
    }

    #[test]
    fn test_overrides() {
        let config = build(&vars(&[
            ("DB_PATH", "/data/legacy.sqlite"),
            ("PG_DB_PORT", "6432"),
            ("PG_DB_SEARCH_PATH", "content,public"),
            ("SOURCE_BATCH_SIZE", "500"),
        ]))
        .unwrap();

        assert_eq!(config.source.path, PathBuf::from("/data/legacy.sqlite"));
        assert_eq!(config.source.batch_size, 500);
        assert_eq!(config.target.port, 6432);
        assert_eq!(config.target.search_path, "content,public");
        assert_eq!(config.target.schema().as_deref(), Some("content"));
    }

    #[test]
    fn test_missing_required_variable() {
        for (name, _) in REQUIRED {
            let mut vars = vars(&[]);
            vars.remove(*name);

            let err = build(&vars).unwrap_err();
            assert_eq!(err.to_string(), format!("Configuration error: {name} must be set"));
        }
    }

    #[test]
    fn test_blank_variable_counts_as_missing() {
        let err = build(&vars(&[("PG_HOST", "  ")])).unwrap_err();
        assert!(matches!(err, MigrationError::Config(_)));
    }

    #[test]
    fn test_search_path_without_schema() {
        let err = build(&vars(&[("PG_DB_SEARCH_PATH", "\"$user\"")])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Configuration error: PG_DB_SEARCH_PATH names no schema: \"$user\""
        );
    }

    #[test]
    fn test_invalid_numbers() {
        assert!(build(&vars(&[("PG_DB_PORT", "postgres")])).is_err());
        assert!(build(&vars(&[("PG_DB_PORT", "70000")])).is_err());
        assert!(build(&vars(&[("SOURCE_BATCH_SIZE", "0")])).is_err());
        assert!(build(&vars(&[("SOURCE_BATCH_SIZE", "-5")])).is_err());
    }

    #[test]
    #[serial]
    fn test_from_env() {
        for (name, value) in REQUIRED {
            env::set_var(name, value);
        }
        env::set_var("PG_DB_PORT", "5433");
        env::remove_var("SOURCE_BATCH_SIZE");

        let config = MigrationConfig::from_env().unwrap();

        assert_eq!(config.target.port, 5433);
        assert!(config.source.path.ends_with("db.sqlite"));
        assert!(config.source.path.is_absolute());

        env::remove_var("PG_DB_PORT");
    }

    #[test]
    #[serial]
    fn test_from_env_without_database_path() {
        for (name, value) in REQUIRED {
            env::set_var(name, value);
        }
        env::remove_var("DB_PATH");

        let err = MigrationConfig::from_env().unwrap_err();
        assert_eq!(err.to_string(), "Configuration error: DB_PATH must be set");
    }
}
