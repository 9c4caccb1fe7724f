//! Application configuration and constants.
//!
//! This module provides:
//! - Default paths and export targets
//! - Logging option types used by the CLI
//! - The library `Config` and its validation

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel, TableExport};
