//! Row conversion.
//!
//! Turns a positional `SqliteRow` into a JSON object keyed by column name.
//! Values are converted by the storage class of each individual cell rather
//! than the column's declared type, since SQLite lets any column hold any
//! class.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde_json::{Map, Number, Value};
use sqlx::sqlite::SqliteRow;
use sqlx::{Column, Row, TypeInfo, ValueRef};

use crate::error_handling::ExportError;

/// One exported row: column name → value, in column order.
pub type JsonRow = Map<String, Value>;

/// Converts a fetched row into an ordered JSON object.
///
/// | storage class | JSON                         |
/// |---------------|------------------------------|
/// | NULL          | `null`                       |
/// | INTEGER       | integer                      |
/// | REAL          | number (finite only)         |
/// | TEXT          | string                       |
/// | BLOB          | base64 string (standard)     |
///
/// # Errors
///
/// Returns `ExportError::NonFiniteReal` for an infinite REAL, and
/// `ExportError::Query` when a cell cannot be decoded (e.g. TEXT that is not
/// valid UTF-8).
pub fn row_to_json(table: &str, row: &SqliteRow) -> Result<JsonRow, ExportError> {
    let mut object = Map::with_capacity(row.len());
    for column in row.columns() {
        let value = cell_to_json(table, row, column.ordinal(), column.name())?;
        object.insert(column.name().to_string(), value);
    }
    Ok(object)
}

fn cell_to_json(
    table: &str,
    row: &SqliteRow,
    index: usize,
    column: &str,
) -> Result<Value, ExportError> {
    let decode_error = |source: sqlx::Error| ExportError::Query {
        table: table.to_string(),
        source,
    };

    let raw = row.try_get_raw(index).map_err(decode_error)?;
    if raw.is_null() {
        return Ok(Value::Null);
    }
    let type_name = raw.type_info().name().to_string();

    match type_name.as_str() {
        "INTEGER" => {
            let v: i64 = row.try_get_unchecked(index).map_err(decode_error)?;
            Ok(Value::from(v))
        }
        "REAL" => {
            let v: f64 = row.try_get_unchecked(index).map_err(decode_error)?;
            Number::from_f64(v)
                .map(Value::Number)
                .ok_or_else(|| ExportError::NonFiniteReal {
                    table: table.to_string(),
                    column: column.to_string(),
                })
        }
        "TEXT" => {
            let v: String = row.try_get_unchecked(index).map_err(decode_error)?;
            Ok(Value::String(v))
        }
        "BLOB" => {
            let v: Vec<u8> = row.try_get_unchecked(index).map_err(decode_error)?;
            Ok(Value::String(STANDARD.encode(v)))
        }
        _ => Err(ExportError::UnsupportedType {
            table: table.to_string(),
            column: column.to_string(),
            type_name,
        }),
    }
}
