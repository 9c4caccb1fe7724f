//! Error type definitions.

use std::fmt;
use std::path::PathBuf;

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Error types for database operations.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// SQL execution error.
    #[error("SQL error: {0}")]
    SqlError(#[from] sqlx::Error),
}

/// Error types for the export run.
///
/// `DatabaseNotFound` is the precondition failure and is raised before any
/// connection attempt. Every other variant is a runtime failure; the
/// table-scoped ones only fail the table they belong to.
#[derive(Error, Debug)]
pub enum ExportError {
    /// The database file is missing.
    #[error("{} not found", .0.display())]
    DatabaseNotFound(PathBuf),

    /// The configuration was rejected before the run started.
    #[error(transparent)]
    InvalidConfig(#[from] ConfigValidationError),

    /// Connecting to the database or reading its catalog failed.
    #[error(transparent)]
    Database(#[from] DatabaseError),

    /// Fetching the rows of a table failed.
    #[error("Failed to read table '{table}': {source}")]
    Query {
        /// Table being read
        table: String,
        /// Underlying driver error
        #[source]
        source: sqlx::Error,
    },

    /// A REAL cell holds a value JSON cannot represent (infinity).
    #[error("Table '{table}' column '{column}' holds a non-finite REAL value")]
    NonFiniteReal {
        /// Table being read
        table: String,
        /// Column holding the value
        column: String,
    },

    /// A cell reported a storage class outside SQLite's five.
    #[error("Table '{table}' column '{column}' has unsupported type {type_name}")]
    UnsupportedType {
        /// Table being read
        table: String,
        /// Column holding the value
        column: String,
        /// Storage class reported by SQLite
        type_name: String,
    },

    /// Encoding the export document failed.
    #[error("JSON serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Writing the export document failed.
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        /// Output file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl ExportError {
    /// Returns true for the missing-database precondition failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ExportError::DatabaseNotFound(_))
    }
}

/// A configuration field failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigValidationError {
    /// Name of the offending field
    pub field: &'static str,
    /// What is wrong and how to fix it
    pub message: String,
}

impl ConfigValidationError {
    pub(crate) fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid {}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigValidationError {}
