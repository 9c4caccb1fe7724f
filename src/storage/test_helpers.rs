//! Shared test helpers for storage and export tests.

use std::path::{Path, PathBuf};

use sqlx::sqlite::SqliteConnectOptions;
use sqlx::{ConnectOptions, Connection};

/// Creates `test.db` inside `dir`, runs each statement in order, and
/// returns the database path. The connection is closed before returning
/// so the exporter sees a quiescent file.
pub async fn create_test_db(dir: &Path, statements: &[&str]) -> PathBuf {
    let db_path = dir.join("test.db");
    let mut conn = SqliteConnectOptions::new()
        .filename(&db_path)
        .create_if_missing(true)
        .connect()
        .await
        .expect("Failed to create test database");

    // Writes the header so even an empty database is a real file on disk.
    sqlx::query("PRAGMA user_version = 1")
        .execute(&mut conn)
        .await
        .expect("Failed to initialize test database");

    for statement in statements {
        sqlx::query(statement)
            .execute(&mut conn)
            .await
            .expect("Failed to run setup statement");
    }

    conn.close().await.expect("Failed to close test database");
    db_path
}
