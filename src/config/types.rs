//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::collections::HashSet;
use std::path::PathBuf;

use clap::ValueEnum;

use crate::config::constants::{
    DB_PATH, OUTPUT_DIR, QUOTES_OUTPUT, QUOTE_TABLE, VIRTUES_OUTPUT, VIRTUE_TABLE,
};
use crate::error_handling::ConfigValidationError;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// One table to export and the file it is written to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableExport {
    /// Table name as it appears in `sqlite_master`
    pub table: String,
    /// Output file name, resolved against `Config::output_dir`
    pub output: String,
    /// Plural noun used in the "Dumped N <label>" console line
    pub label: String,
}

impl TableExport {
    /// Creates an export target.
    pub fn new(table: impl Into<String>, output: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            output: output.into(),
            label: label.into(),
        }
    }
}

/// Library configuration (no CLI dependencies).
///
/// The defaults reproduce the fixed behaviour of the tool: read `dev.db`
/// and dump `Quote` and `Virtue` into the working directory.
///
/// # Examples
///
/// ```no_run
/// use table_dump::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     db_path: PathBuf::from("backup.db"),
///     output_dir: PathBuf::from("out"),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Database path (SQLite file)
    pub db_path: PathBuf,

    /// Directory the export documents are written into
    pub output_dir: PathBuf,

    /// Tables to export, in order
    pub exports: Vec<TableExport>,

    /// Log level; `None` leaves filtering to `RUST_LOG` (default `info`)
    pub log_level: Option<LogLevel>,

    /// Log format
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DB_PATH),
            output_dir: PathBuf::from(OUTPUT_DIR),
            exports: vec![
                TableExport::new(QUOTE_TABLE, QUOTES_OUTPUT, "quotes"),
                TableExport::new(VIRTUE_TABLE, VIRTUES_OUTPUT, "virtues"),
            ],
            log_level: None,
            log_format: LogFormat::Plain,
        }
    }
}

impl Config {
    /// Checks the export list before any database work starts.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigValidationError`] naming the offending field when the
    /// export list is empty, a target has a blank table or output name, an
    /// output name is not a bare file name, or two targets write the same file.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.exports.is_empty() {
            return Err(ConfigValidationError::new(
                "exports",
                "at least one table must be configured for export",
            ));
        }

        let mut outputs = HashSet::new();
        for export in &self.exports {
            if export.table.trim().is_empty() {
                return Err(ConfigValidationError::new(
                    "exports.table",
                    "table name must not be empty",
                ));
            }
            if export.output.trim().is_empty() {
                return Err(ConfigValidationError::new(
                    "exports.output",
                    format!("output file for table '{}' must not be empty", export.table),
                ));
            }
            if export.output.contains(['/', '\\']) {
                return Err(ConfigValidationError::new(
                    "exports.output",
                    format!(
                        "output '{}' must be a file name; use output_dir to choose a directory",
                        export.output
                    ),
                ));
            }
            if !outputs.insert(export.output.as_str()) {
                return Err(ConfigValidationError::new(
                    "exports.output",
                    format!("output '{}' is used by more than one table", export.output),
                ));
            }
        }

        Ok(())
    }
}
