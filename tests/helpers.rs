// Shared test helpers for database setup.
//
// Included from other test files with `#[path = "helpers.rs"] mod helpers;`.

use std::path::{Path, PathBuf};

use sqlx::sqlite::SqliteConnectOptions;
use sqlx::{ConnectOptions, Connection};

use table_dump::{Config, TableExport};

/// Creates a database file at `dir/<name>`, runs each statement, and closes
/// the connection.
pub async fn create_db(dir: &Path, name: &str, statements: &[&str]) -> PathBuf {
    let db_path = dir.join(name);
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

/// Schema and rows for a small `Quote` table.
#[allow(dead_code)] // Used by other test files
pub const QUOTE_FIXTURE: &[&str] = &[
    "CREATE TABLE Quote (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        text TEXT NOT NULL,
        author TEXT,
        rating REAL,
        createdAt INTEGER NOT NULL
    )",
    "INSERT INTO Quote (text, author, rating, createdAt) VALUES
        ('The obstacle is the way.', 'Marcus Aurelius', 4.5, 1704067200000),
        ('Know thyself.', NULL, NULL, 1704067200001),
        ('Wer fremde Sprachen nicht kennt, weiß nichts von seiner eigenen.', 'Goethe', 3.25, 1704067200002)",
];

/// Schema and rows for a small `Virtue` table.
#[allow(dead_code)] // Used by other test files
pub const VIRTUE_FIXTURE: &[&str] = &[
    "CREATE TABLE Virtue (id INTEGER PRIMARY KEY, name TEXT NOT NULL, description TEXT)",
    "INSERT INTO Virtue (id, name, description) VALUES
        (1, 'Courage', 'Acting rightly in the face of fear'),
        (2, 'Temperance', NULL)",
];

/// Default export targets, reading `db_path` and writing into `output_dir`.
#[allow(dead_code)] // Used by other test files
pub fn config_for(db_path: &Path, output_dir: &Path) -> Config {
    Config {
        db_path: db_path.to_path_buf(),
        output_dir: output_dir.to_path_buf(),
        ..Default::default()
    }
}

/// Reads an export document back as a JSON array.
#[allow(dead_code)] // Used by other test files
pub fn read_document(path: &Path) -> Vec<serde_json::Value> {
    let contents = std::fs::read_to_string(path).expect("Failed to read export document");
    serde_json::from_str::<serde_json::Value>(&contents)
        .expect("Export document should be valid JSON")
        .as_array()
        .expect("Export document should be an array")
        .clone()
}

#[allow(dead_code)] // Used by other test files
pub fn target(table: &str, output: &str) -> TableExport {
    TableExport::new(table, output, table.to_lowercase())
}
