//! Grid normalization from heterogeneous sources.
//!
//! Every table starts as a [`Grid`]: a header row of labels plus data rows,
//! all cells held as `serde_json::Value`. Construction normalizes the grid to
//! a rectangle — the column count is the maximum length seen across the
//! header and all rows, and shorter rows are right-padded with nulls. Null
//! cells render as empty strings, never as a literal "null".

use serde::Serialize;
use serde_json::Value;

use crate::error::TableError;

/// Normalized rectangular grid: header labels plus equal-length data rows.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Grid {
    headers: Vec<Value>,
    rows: Vec<Vec<Value>>,
}

impl Grid {
    /// Builds a grid from flat rows with no header labels.
    ///
    /// An empty row list is a valid zero-row grid, so a table can still be
    /// rendered from headers added later.
    pub fn from_rows(rows: Vec<Vec<Value>>) -> Self {
        let mut grid = Grid {
            headers: Vec::new(),
            rows,
        };
        grid.normalize();
        grid
    }

    /// Builds a grid from a labeled-column source (named columns plus rows),
    /// the shape a database-style table adapter produces.
    pub fn from_table(columns: Vec<String>, rows: Vec<Vec<Value>>) -> Self {
        let mut grid = Grid {
            headers: columns.into_iter().map(Value::String).collect(),
            rows,
        };
        grid.normalize();
        grid
    }

    /// Builds a grid by reflecting over serializable records.
    ///
    /// Each record field becomes one column, in declaration order; the field
    /// names become header labels. Records that serialize to a plain scalar
    /// produce a single `Value` column instead. Later records are read
    /// through the first record's columns, so missing fields render empty.
    pub fn from_records<T: Serialize>(records: &[T]) -> Result<Self, TableError> {
        let mut headers: Vec<Value> = Vec::new();
        let mut rows: Vec<Vec<Value>> = Vec::new();

        for (i, record) in records.iter().enumerate() {
            let value = serde_json::to_value(record)?;
            match value {
                Value::Object(map) => {
                    if i == 0 {
                        headers = map.keys().cloned().map(Value::String).collect();
                    }
                    let row = headers
                        .iter()
                        .map(|label| match label {
                            Value::String(key) => map.get(key).cloned().unwrap_or(Value::Null),
                            _ => Value::Null,
                        })
                        .collect();
                    rows.push(row);
                }
                Value::Array(_) => {
                    return Err(TableError::InvalidInput(
                        "record serialized to a sequence; expected a struct or scalar".into(),
                    ));
                }
                scalar => {
                    if i == 0 {
                        headers = vec![Value::String("Value".into())];
                    }
                    rows.push(vec![scalar]);
                }
            }
        }

        let mut grid = Grid { headers, rows };
        grid.normalize();
        Ok(grid)
    }

    /// Replaces the header labels, re-normalizing the grid.
    pub fn set_headers(&mut self, headers: Vec<Value>) {
        self.headers = headers;
        self.normalize();
    }

    /// Appends a data row, re-normalizing the grid.
    pub fn push_row(&mut self, row: Vec<Value>) {
        self.rows.push(row);
        self.normalize();
    }

    /// Number of columns after normalization.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Number of data rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn headers(&self) -> &[Value] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    /// Pads the header and every row with nulls up to the widest length seen.
    fn normalize(&mut self) {
        let columns = self
            .rows
            .iter()
            .map(|row| row.len())
            .max()
            .unwrap_or(0)
            .max(self.headers.len());

        self.headers.resize(columns, Value::Null);
        for row in &mut self.rows {
            row.resize(columns, Value::Null);
        }
    }
}

/// Renders a cell value as text: nulls are empty, strings verbatim, numbers
/// and booleans in their display form.
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
