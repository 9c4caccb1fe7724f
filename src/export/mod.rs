//! Export of SQLite tables to JSON documents.
//!
//! Each configured table is fetched in full, every row is converted into an
//! ordered column-name → value object, and the resulting array is written as
//! a two-space indented JSON file.

mod document;
mod row;
mod table;
mod types;

pub use document::render_document;
pub use row::{row_to_json, JsonRow};
pub use table::{export_table, fetch_table, quote_identifier};
pub use types::{ExportProgress, ExportReport, TableOutcome, TableReport};
