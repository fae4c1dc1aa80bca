//! Movies ETL Main Entry Point
//!
//! Copies the legacy SQLite catalogue into PostgreSQL, then exits.

use dotenv::dotenv;
use movies_etl::{MigrationConfig, MigrationDriver, MigrationError};
use std::env;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing/logging.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("movies_etl=info,movies_etl_repository=info"));

    let json = env::var("LOG_FORMAT")
        .map(|format| format.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_thread_ids(true),
            )
            .init();

        info!(
            service_name = "movies-etl",
            service_version = env!("CARGO_PKG_VERSION"),
            "Tracing initialized with JSON format"
        );
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_target(true).pretty())
            .init();

        info!(
            service_name = "movies-etl",
            service_version = env!("CARGO_PKG_VERSION"),
            "Tracing initialized with console output"
        );
    }
}

#[tokio::main]
async fn main() -> Result<(), MigrationError> {
    // Load environment variables from .env file
    dotenv().ok();

    init_tracing();

    info!("Starting movies migration");

    let config = match MigrationConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            return Err(e);
        }
    };

    // The driver logs failures itself.
    let mut driver = MigrationDriver::new(config);
    let report = driver.run().await?;

    for load in &report.loads {
        info!(
            entity_kind = %load.kind,
            rows_read = load.rows_read,
            rows_inserted = load.rows_inserted,
            rows_skipped = load.rows_skipped(),
            "Loaded"
        );
    }
    info!(
        elapsed_ms = report.elapsed.as_millis() as u64,
        "Migration completed successfully"
    );

    Ok(())
}
