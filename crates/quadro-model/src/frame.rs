use crate::row;
use quadro_columnar::{Column, ColumnError, Value};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Minimum rendered cell width in the tabular display. The separator rule is
/// sized off this: each column contributes the cell width plus the `" | "`
/// delimiter.
const CELL_WIDTH: usize = 10;

/// Placeholder substituted when a logical row resolves to a physical index a
/// column does not cover.
const NA_PLACEHOLDER: &str = "N/A";

/// Errors that can occur when building or reading a frame.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FrameError {
    /// A column was registered with a physical size different from the
    /// frame's established row count.
    #[error("column `{name}` has {actual} rows, expected {expected}")]
    SizeMismatch {
        name: String,
        expected: usize,
        actual: usize,
    },
    /// A column or logical row lookup past the end.
    #[error("index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },
    /// A wrong-length argument: a replacement row order, or an appended row
    /// whose width differs from the column count.
    #[error("{what} has {actual} entries, expected {expected}")]
    InvalidArgument {
        what: &'static str,
        expected: usize,
        actual: usize,
    },
    /// A value could not be coerced to its target column's type.
    #[error(transparent)]
    TypeMismatch(#[from] ColumnError),
}

/// An ordered set of typed columns sharing one row count, plus a logical
/// row-order indirection.
///
/// The frame owns its columns outright; callers borrow them through
/// [`DataFrame::get_column`]. `row_order` maps logical row position to
/// physical storage index, so any sort or filter is "compute a new index
/// vector"; stored values never move.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DataFrame {
    columns: Vec<Column>,
    row_count: usize,
    row_order: Vec<usize>,
}

impl DataFrame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Shared row count; every registered column's physical size equals this.
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Register a column.
    ///
    /// The first column adopts its size as the frame's row count and seeds
    /// the identity row order; later columns must match that row count
    /// exactly or the call fails with [`FrameError::SizeMismatch`] leaving
    /// the frame untouched.
    pub fn add_column(&mut self, mut column: Column) -> Result<(), FrameError> {
        if self.columns.is_empty() {
            self.row_count = column.len();
            self.row_order = (0..self.row_count).collect();
        } else if column.len() != self.row_count {
            return Err(FrameError::SizeMismatch {
                name: column.name().to_string(),
                expected: self.row_count,
                actual: column.len(),
            });
        }
        column.set_position(self.columns.len());
        self.columns.push(column);
        Ok(())
    }

    /// Append one logical row given in the common tagged shape, fanning
    /// values across columns positionally. [`Value::Null`] entries append NA.
    ///
    /// The row width must equal the column count. Every value is checked
    /// before any column is touched, so a failing call leaves the frame
    /// exactly as it was.
    pub fn add_row(&mut self, row: &[Value]) -> Result<(), FrameError> {
        if row.len() != self.columns.len() {
            return Err(FrameError::InvalidArgument {
                what: "row",
                expected: self.columns.len(),
                actual: row.len(),
            });
        }
        for (column, value) in self.columns.iter().zip(row) {
            column.can_push(value)?;
        }
        for (column, value) in self.columns.iter_mut().zip(row) {
            if value.is_null() {
                column.push_na();
            } else {
                column.push_value(value)?;
            }
        }
        self.row_order.push(self.row_count);
        self.row_count += 1;
        Ok(())
    }

    /// Append one row given in the dynamically-typed JSON shape.
    ///
    /// JSON `null` is the NA tag; numbers enter as ints when integral and
    /// floats otherwise; arrays and objects have no cell representation and
    /// fail with the target column's type mismatch.
    pub fn add_row_json(&mut self, row: &[serde_json::Value]) -> Result<(), FrameError> {
        if row.len() != self.columns.len() {
            return Err(FrameError::InvalidArgument {
                what: "row",
                expected: self.columns.len(),
                actual: row.len(),
            });
        }
        let row = row::values_from_json(&self.columns, row)?;
        self.add_row(&row)
    }

    /// Append one row given in the string shape: the empty string is the NA
    /// tag, anything else is parsed by its target column.
    pub fn add_row_strs(&mut self, row: &[&str]) -> Result<(), FrameError> {
        let row = row::values_from_strs(row);
        self.add_row(&row)
    }

    /// Borrow the column at `index`.
    pub fn get_column(&self, index: usize) -> Result<&Column, FrameError> {
        self.columns.get(index).ok_or(FrameError::IndexOutOfRange {
            index,
            len: self.columns.len(),
        })
    }

    /// Borrow a column by identifier.
    pub fn column_by_name(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name() == name)
    }

    /// The logical row at `relative_index`, rendered to one string per
    /// column in column order.
    ///
    /// The index is resolved through the row order; columns shorter than the
    /// resolved physical index contribute the fixed `"N/A"` placeholder.
    /// Empty when the frame has no columns.
    pub fn get_row(&self, relative_index: usize) -> Result<Vec<String>, FrameError> {
        if relative_index >= self.row_order.len() {
            return Err(FrameError::IndexOutOfRange {
                index: relative_index,
                len: self.row_order.len(),
            });
        }
        Ok(self.render_physical_row(self.row_order[relative_index]))
    }

    /// The current logical-to-physical row mapping.
    pub fn row_order(&self) -> &[usize] {
        &self.row_order
    }

    /// Replace the row order wholesale.
    ///
    /// The replacement must have the same length as the current order.
    /// Entries are deliberately not validated: permutations reorder, index
    /// multisets filter, and out-of-range entries surface as the rendering
    /// placeholder.
    pub fn set_row_order(&mut self, new_order: Vec<usize>) -> Result<(), FrameError> {
        if new_order.len() != self.row_order.len() {
            return Err(FrameError::InvalidArgument {
                what: "row order",
                expected: self.row_order.len(),
                actual: new_order.len(),
            });
        }
        self.row_order = new_order;
        Ok(())
    }

    /// Discard any reordering and restore the identity permutation.
    pub fn reset_row_order(&mut self) {
        self.row_order = (0..self.row_count).collect();
    }

    /// Rendered logical rows, in the current row order.
    pub fn rows(&self) -> impl Iterator<Item = Vec<String>> + '_ {
        self.row_order
            .iter()
            .map(|&actual| self.render_physical_row(actual))
    }

    fn render_physical_row(&self, actual_index: usize) -> Vec<String> {
        self.columns
            .iter()
            .map(|column| {
                column
                    .render(actual_index)
                    .unwrap_or_else(|| NA_PLACEHOLDER.to_string())
            })
            .collect()
    }
}

/// Fixed-width, pipe-delimited diagnostic rendering: a header of column
/// identifiers, a `=` rule sized to the column count, then one line per
/// logical row. Reflects the current row order, not physical storage order.
impl fmt::Display for DataFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("| ")?;
        for column in &self.columns {
            write!(f, "{:<width$} | ", column.name(), width = CELL_WIDTH)?;
        }
        writeln!(f)?;

        let rule = ((CELL_WIDTH + 3) * self.columns.len()).saturating_sub(1);
        writeln!(f, "|{}|", "=".repeat(rule))?;

        for row in self.rows() {
            f.write_str("| ")?;
            for cell in row {
                write!(f, "{cell:<width$} | ", width = CELL_WIDTH)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use quadro_columnar::ColumnType;

    #[test]
    fn first_column_seeds_row_count_and_identity_order() {
        let mut frame = DataFrame::new();
        frame
            .add_column(
                Column::with_values(
                    "id",
                    ColumnType::Int,
                    &[Value::Int(1), Value::Int(2), Value::Int(3)],
                )
                .unwrap(),
            )
            .unwrap();

        assert_eq!(frame.row_count(), 3);
        assert_eq!(frame.row_order(), &[0, 1, 2]);
        assert_eq!(frame.get_column(0).unwrap().position(), 0);
    }

    #[test]
    fn error_messages_name_the_violation() {
        assert_eq!(
            FrameError::SizeMismatch {
                name: "x".to_string(),
                expected: 3,
                actual: 2,
            }
            .to_string(),
            "column `x` has 2 rows, expected 3"
        );
        assert_eq!(
            FrameError::InvalidArgument {
                what: "row order",
                expected: 4,
                actual: 1,
            }
            .to_string(),
            "row order has 1 entries, expected 4"
        );
    }
}
