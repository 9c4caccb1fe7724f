//! Database connection management.
//!
//! The exporter holds a single connection for the whole run. The file is
//! never created here: a missing database is a caller error, not something
//! to paper over with an empty one.

use std::path::Path;

use log::debug;
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::ConnectOptions;

use crate::error_handling::DatabaseError;

/// Opens a connection to an existing SQLite database file.
///
/// # Errors
///
/// Returns `DatabaseError::SqlError` if the file cannot be opened as a
/// SQLite database (including when it does not exist).
pub async fn open_connection(db_path: &Path) -> Result<SqliteConnection, DatabaseError> {
    let conn = SqliteConnectOptions::new()
        .filename(db_path)
        .create_if_missing(false)
        .connect()
        .await
        .map_err(|e| {
            debug!("Failed to connect to database {}: {e}", db_path.display());
            DatabaseError::SqlError(e)
        })?;

    debug!("Connected to {}", db_path.display());
    Ok(conn)
}
