//! Configuration constants.
//!
//! Default locations and formatting parameters used when no explicit
//! [`Config`](super::Config) overrides them.

/// Database file read by the exporter, relative to the working directory.
pub const DB_PATH: &str = "dev.db";

/// Directory the export documents are written into.
pub const OUTPUT_DIR: &str = ".";

/// Table holding the quotes.
pub const QUOTE_TABLE: &str = "Quote";
/// Output file for the `Quote` table.
pub const QUOTES_OUTPUT: &str = "quotes_dump.json";

/// Table holding the virtues.
pub const VIRTUE_TABLE: &str = "Virtue";
/// Output file for the `Virtue` table.
pub const VIRTUES_OUTPUT: &str = "virtues_dump.json";

/// Indentation used for every export document (two spaces).
pub const JSON_INDENT: &[u8] = b"  ";

/// Catalog query listing user tables in creation order.
pub const TABLE_CATALOG_QUERY: &str = "SELECT name FROM sqlite_master WHERE type='table'";
