//! Error handling.
//!
//! Errors are split by the stage that produced them:
//! - **Initialization**: logger setup
//! - **Database**: locating and connecting to the SQLite file, catalog queries
//! - **Export**: per-table fetch, row conversion, serialization and file writes
//! - **Configuration**: invalid export targets

mod types;

// Re-export public API
pub use types::{ConfigValidationError, DatabaseError, ExportError, InitializationError};
