//! Application initialization.
//!
//! The exporter only needs one process-wide resource before it runs: the logger.

mod logger;

// Re-export public API
pub use logger::init_logger_with;
