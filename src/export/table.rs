//! Per-table export: fetch every row, render, write.

use std::path::{Path, PathBuf};

use futures::TryStreamExt;
use log::{debug, info};
use sqlx::SqliteConnection;

use crate::config::TableExport;
use crate::error_handling::ExportError;

use super::document::render_document;
use super::row::{row_to_json, JsonRow};

/// Quotes an SQL identifier, doubling any embedded double quotes.
pub fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Fetches all rows of `table` in the order SQLite returns them.
///
/// # Errors
///
/// Returns `ExportError::Query` if the query fails, or any row conversion
/// error from [`row_to_json`].
pub async fn fetch_table(
    conn: &mut SqliteConnection,
    table: &str,
) -> Result<Vec<JsonRow>, ExportError> {
    let sql = format!("SELECT * FROM {}", quote_identifier(table));
    debug!("Running: {sql}");

    let mut rows = sqlx::query(&sql).fetch(&mut *conn);
    let mut objects = Vec::new();

    while let Some(row) = rows.try_next().await.map_err(|source| ExportError::Query {
        table: table.to_string(),
        source,
    })? {
        objects.push(row_to_json(table, &row)?);
    }

    Ok(objects)
}

/// Exports one table to `output_dir/<target.output>`.
///
/// The document is rendered fully in memory before the file is touched, so a
/// table that fails to convert leaves any previous output file unchanged.
/// An existing file is overwritten.
///
/// # Returns
///
/// The number of rows written and the path of the output file.
pub async fn export_table(
    conn: &mut SqliteConnection,
    target: &TableExport,
    output_dir: &Path,
) -> Result<(usize, PathBuf), ExportError> {
    let rows = fetch_table(conn, &target.table).await?;
    let document = render_document(&rows)?;

    let path = output_dir.join(&target.output);
    tokio::fs::write(&path, &document)
        .await
        .map_err(|source| ExportError::Write {
            path: path.clone(),
            source,
        })?;

    info!(
        "Exported {} row(s) from {} to {}",
        rows.len(),
        target.table,
        path.display()
    );
    Ok((rows.len(), path))
}
