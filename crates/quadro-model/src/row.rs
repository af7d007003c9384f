//! Conversions from the alternate row-input shapes into the common tagged
//! shape consumed by [`DataFrame::add_row`](crate::DataFrame::add_row).

use crate::frame::FrameError;
use quadro_columnar::{Column, ColumnError, Value};

/// Map a JSON row onto its target columns.
///
/// Scalars map one-to-one; arrays and objects have no cell form, so they are
/// reported as a type mismatch against the column they were aimed at. The
/// caller has already checked the widths match.
pub(crate) fn values_from_json(
    columns: &[Column],
    row: &[serde_json::Value],
) -> Result<Vec<Value>, FrameError> {
    columns
        .iter()
        .zip(row)
        .map(|(column, json)| {
            scalar_from_json(json).ok_or_else(|| {
                FrameError::TypeMismatch(ColumnError::TypeMismatch {
                    column: column.name().to_string(),
                    expected: column.column_type(),
                    value: Value::String(json.to_string()),
                })
            })
        })
        .collect()
}

fn scalar_from_json(json: &serde_json::Value) -> Option<Value> {
    match json {
        serde_json::Value::Null => Some(Value::Null),
        serde_json::Value::Bool(b) => Some(Value::Bool(*b)),
        serde_json::Value::Number(n) => match n.as_i64() {
            Some(i) => Some(Value::Int(i)),
            None => n.as_f64().map(Value::Float),
        },
        serde_json::Value::String(s) => Some(Value::String(s.clone())),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => None,
    }
}

/// Map a string row into the common shape. The empty string is the NA tag;
/// everything else stays a string for the target column to parse.
pub(crate) fn values_from_strs(row: &[&str]) -> Vec<Value> {
    row.iter()
        .map(|cell| {
            if cell.is_empty() {
                Value::Null
            } else {
                Value::String((*cell).to_string())
            }
        })
        .collect()
}
