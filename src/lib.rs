//! table_dump library: SQLite table export to JSON
//!
//! Reads a local SQLite database, lists its tables, and writes the full
//! contents of each configured table (by default `Quote` and `Virtue`) to a
//! two-space indented JSON array file.
//!
//! # Example
//!
//! ```no_run
//! use table_dump::{run_export, Config};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let report = run_export(&Config::default()).await?;
//! println!("Tables found: {:?}", report.tables_found);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. The export itself is strictly
//! sequential, so a `current_thread` runtime is sufficient.

#![warn(missing_docs)]

pub mod config;
mod error_handling;
pub mod export;
pub mod initialization;
mod storage;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel, TableExport};
pub use error_handling::{ConfigValidationError, DatabaseError, ExportError, InitializationError};
pub use export::{ExportProgress, ExportReport, TableOutcome, TableReport};
pub use run::{run_export, run_export_with_progress};

// Internal run module (contains the export procedure)
mod run {
    use std::collections::HashSet;
    use std::time::Instant;

    use log::{debug, info};
    use sqlx::Connection;

    use crate::config::Config;
    use crate::error_handling::{DatabaseError, ExportError};
    use crate::export::{export_table, ExportProgress, ExportReport, TableOutcome, TableReport};
    use crate::storage::{list_tables, open_connection};

    /// Runs the export described by `config`.
    ///
    /// Equivalent to [`run_export_with_progress`] with a no-op callback.
    pub async fn run_export(config: &Config) -> Result<ExportReport, ExportError> {
        run_export_with_progress(config, |_| {}).await
    }

    /// Runs the export described by `config`, reporting progress as it goes.
    ///
    /// Steps, in order:
    /// 1. Fail with `ExportError::DatabaseNotFound` if `config.db_path` does
    ///    not exist. No connection is attempted and nothing is written.
    /// 2. Open the database and list its tables
    ///    (`ExportProgress::TablesFound`).
    /// 3. For each configured target: skip it if its table is absent,
    ///    otherwise export it. A target that fails is recorded in the report
    ///    and does not stop the remaining targets. Each finished target is
    ///    passed to `on_progress` (`ExportProgress::TableDone`) before the
    ///    next one starts.
    /// 4. Close the connection.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, the database file is
    /// missing, or the connection, catalog query, or close fails. Per-table
    /// failures are reported through [`TableOutcome::Failed`] instead.
    pub async fn run_export_with_progress<F>(
        config: &Config,
        mut on_progress: F,
    ) -> Result<ExportReport, ExportError>
    where
        F: FnMut(ExportProgress<'_>),
    {
        let start = Instant::now();
        config.validate()?;

        if !config.db_path.exists() {
            debug!("Database file {} not found", config.db_path.display());
            return Err(ExportError::DatabaseNotFound(config.db_path.clone()));
        }

        let mut conn = open_connection(&config.db_path).await?;
        let tables_found = list_tables(&mut conn).await?;
        info!("Tables found: {:?}", tables_found);
        on_progress(ExportProgress::TablesFound(&tables_found));

        let present: HashSet<&str> = tables_found.iter().map(String::as_str).collect();
        let mut results = Vec::with_capacity(config.exports.len());

        for target in &config.exports {
            let outcome = if !present.contains(target.table.as_str()) {
                info!("Table {} not present, skipping", target.table);
                TableOutcome::Skipped
            } else {
                match export_table(&mut conn, target, &config.output_dir).await {
                    Ok((rows, path)) => TableOutcome::Exported { rows, path },
                    Err(error) => {
                        debug!("Failed to export table {}: {error}", target.table);
                        TableOutcome::Failed { error }
                    }
                }
            };

            let result = TableReport {
                table: target.table.clone(),
                output: target.output.clone(),
                label: target.label.clone(),
                outcome,
            };
            on_progress(ExportProgress::TableDone(&result));
            results.push(result);
        }

        conn.close().await.map_err(DatabaseError::SqlError)?;

        Ok(ExportReport {
            db_path: config.db_path.clone(),
            tables_found,
            results,
            elapsed_seconds: start.elapsed().as_secs_f64(),
        })
    }
}
