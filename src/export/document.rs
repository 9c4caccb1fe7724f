//! Export document rendering.

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::config::JSON_INDENT;
use crate::error_handling::ExportError;

use super::row::JsonRow;

/// Renders rows as a two-space indented JSON array.
///
/// Non-ASCII text is written as UTF-8, not escaped. No trailing newline is
/// appended, so the output is stable across runs for identical input.
pub fn render_document(rows: &[JsonRow]) -> Result<Vec<u8>, ExportError> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(JSON_INDENT));
    rows.serialize(&mut serializer)?;
    Ok(buf)
}
