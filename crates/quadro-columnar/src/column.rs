#![forbid(unsafe_code)]

use crate::bitmap::BitVec;
use crate::types::{ColumnType, Value};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by column-level value coercion.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColumnError {
    #[error("cannot append `{value}` to {expected} column `{column}`")]
    TypeMismatch {
        column: String,
        expected: ColumnType,
        value: Value,
    },
}

/// One named, typed, append-only sequence of values: a single attribute of
/// every row in a frame.
///
/// A column is created standalone (optionally pre-populated), registered into
/// exactly one frame, and from then on grows only through whole-row appends
/// or NA fills. `len` always counts NA slots.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Column {
    name: String,
    position: usize,
    data: ColumnData,
}

/// Tagged per-type storage: native values plus a validity bitmap.
///
/// NA slots keep a zero placeholder in the value storage with the validity
/// bit cleared, so `values.len() == validity.len()` in every variant.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
enum ColumnData {
    Int { values: Vec<i64>, validity: BitVec },
    Float { values: Vec<f64>, validity: BitVec },
    String { values: Vec<String>, validity: BitVec },
    Bool { values: BitVec, validity: BitVec },
}

impl ColumnData {
    fn new(column_type: ColumnType) -> Self {
        match column_type {
            ColumnType::Int => ColumnData::Int {
                values: Vec::new(),
                validity: BitVec::new(),
            },
            ColumnType::Float => ColumnData::Float {
                values: Vec::new(),
                validity: BitVec::new(),
            },
            ColumnType::String => ColumnData::String {
                values: Vec::new(),
                validity: BitVec::new(),
            },
            ColumnType::Bool => ColumnData::Bool {
                values: BitVec::new(),
                validity: BitVec::new(),
            },
        }
    }

    fn column_type(&self) -> ColumnType {
        match self {
            ColumnData::Int { .. } => ColumnType::Int,
            ColumnData::Float { .. } => ColumnType::Float,
            ColumnData::String { .. } => ColumnType::String,
            ColumnData::Bool { .. } => ColumnType::Bool,
        }
    }

    fn validity(&self) -> &BitVec {
        match self {
            ColumnData::Int { validity, .. }
            | ColumnData::Float { validity, .. }
            | ColumnData::String { validity, .. }
            | ColumnData::Bool { validity, .. } => validity,
        }
    }

    fn push_na(&mut self) {
        match self {
            ColumnData::Int { values, validity } => {
                values.push(0);
                validity.push(false);
            }
            ColumnData::Float { values, validity } => {
                values.push(0.0);
                validity.push(false);
            }
            ColumnData::String { values, validity } => {
                values.push(String::new());
                validity.push(false);
            }
            ColumnData::Bool { values, validity } => {
                values.push(false);
                validity.push(false);
            }
        }
    }
}

impl Column {
    /// Create an empty standalone column.
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            position: 0,
            data: ColumnData::new(column_type),
        }
    }

    /// Create a standalone column pre-populated from tagged values.
    ///
    /// All-or-nothing: every value is coerced before any slot is written, so
    /// a failing value yields an error and no column.
    pub fn with_values(
        name: impl Into<String>,
        column_type: ColumnType,
        values: &[Value],
    ) -> Result<Self, ColumnError> {
        let mut column = Column::new(name, column_type);
        let coerced: Vec<Value> = values
            .iter()
            .map(|value| column.coerce(value))
            .collect::<Result<_, _>>()?;
        for value in coerced {
            column.push_native(value);
        }
        Ok(column)
    }

    /// The column's unique identifier within its frame.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Index within the owning frame's column list; 0 until registered.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Assigned by the owning frame at registration time.
    pub fn set_position(&mut self, position: usize) {
        self.position = position;
    }

    pub fn column_type(&self) -> ColumnType {
        self.data.column_type()
    }

    /// The semantic type tag: `"int"`, `"float"`, `"string"`, or `"bool"`.
    pub fn type_name(&self) -> &'static str {
        self.column_type().name()
    }

    /// Physical size, counting NA slots.
    pub fn len(&self) -> usize {
        self.data.validity().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of NA slots currently stored.
    pub fn na_count(&self) -> usize {
        let validity = self.data.validity();
        validity.len() - validity.count_ones()
    }

    /// Check that `value` is coercible to this column's type without
    /// appending it. The frame's validate-then-apply row append is built on
    /// this.
    pub fn can_push(&self, value: &Value) -> Result<(), ColumnError> {
        self.coerce(value).map(|_| ())
    }

    /// Append one value, coercing it to the column's native type. `Null`
    /// appends an NA slot. A failing append leaves the column untouched.
    pub fn push_value(&mut self, value: &Value) -> Result<(), ColumnError> {
        let coerced = self.coerce(value)?;
        self.push_native(coerced);
        Ok(())
    }

    /// Append one NA slot.
    pub fn push_na(&mut self) {
        self.data.push_na();
    }

    /// True if the slot at `index` exists and is NA.
    pub fn is_na(&self, index: usize) -> bool {
        index < self.len() && !self.data.validity().get(index)
    }

    /// Typed read-back: `None` past the end, [`Value::Null`] for NA slots.
    pub fn value(&self, index: usize) -> Option<Value> {
        if index >= self.len() {
            return None;
        }
        if self.is_na(index) {
            return Some(Value::Null);
        }
        Some(match &self.data {
            ColumnData::Int { values, .. } => Value::Int(values[index]),
            ColumnData::Float { values, .. } => Value::Float(values[index]),
            ColumnData::String { values, .. } => Value::String(values[index].clone()),
            ColumnData::Bool { values, .. } => Value::Bool(values.get(index)),
        })
    }

    /// String rendering of the value at a physical index; NA slots render as
    /// `"N/A"`. `None` past the end.
    pub fn render(&self, index: usize) -> Option<String> {
        self.value(index).map(|value| value.to_string())
    }

    /// Convert `value` to this column's native representation.
    ///
    /// The rules are identical for every row-input shape: exact type matches
    /// pass through, ints widen into float columns, and strings parse into
    /// typed columns (the string row shape arrives this way).
    fn coerce(&self, value: &Value) -> Result<Value, ColumnError> {
        let coerced = match (self.column_type(), value) {
            (_, Value::Null) => Some(Value::Null),
            (ColumnType::Int, Value::Int(v)) => Some(Value::Int(*v)),
            (ColumnType::Int, Value::String(s)) => s.trim().parse::<i64>().ok().map(Value::Int),
            (ColumnType::Float, Value::Float(v)) => Some(Value::Float(*v)),
            (ColumnType::Float, Value::Int(v)) => Some(Value::Float(*v as f64)),
            (ColumnType::Float, Value::String(s)) => s.trim().parse::<f64>().ok().map(Value::Float),
            (ColumnType::String, Value::String(s)) => Some(Value::String(s.clone())),
            (ColumnType::Bool, Value::Bool(v)) => Some(Value::Bool(*v)),
            (ColumnType::Bool, Value::String(s)) => match s.trim() {
                "true" => Some(Value::Bool(true)),
                "false" => Some(Value::Bool(false)),
                _ => None,
            },
            _ => None,
        };
        coerced.ok_or_else(|| ColumnError::TypeMismatch {
            column: self.name.clone(),
            expected: self.column_type(),
            value: value.clone(),
        })
    }

    /// Append a value already coerced to the column's native variant.
    fn push_native(&mut self, value: Value) {
        match (&mut self.data, value) {
            (data, Value::Null) => data.push_na(),
            (ColumnData::Int { values, validity }, Value::Int(v)) => {
                values.push(v);
                validity.push(true);
            }
            (ColumnData::Float { values, validity }, Value::Float(v)) => {
                values.push(v);
                validity.push(true);
            }
            (ColumnData::String { values, validity }, Value::String(v)) => {
                values.push(v);
                validity.push(true);
            }
            (ColumnData::Bool { values, validity }, Value::Bool(v)) => {
                values.push(v);
                validity.push(true);
            }
            _ => unreachable!("coerce returned a value matching the column type"),
        }
    }
}
