//! Catalog queries.

use log::debug;
use sqlx::SqliteConnection;

use crate::config::TABLE_CATALOG_QUERY;
use crate::error_handling::DatabaseError;

/// Lists the names of all tables in the database, in catalog order.
///
/// Internal tables such as `sqlite_sequence` are included, exactly as
/// `sqlite_master` reports them.
pub async fn list_tables(conn: &mut SqliteConnection) -> Result<Vec<String>, DatabaseError> {
    let names = sqlx::query_scalar::<_, String>(TABLE_CATALOG_QUERY)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            debug!("Failed to read table catalog: {e}");
            DatabaseError::SqlError(e)
        })?;

    debug!("Catalog lists {} table(s)", names.len());
    Ok(names)
}
