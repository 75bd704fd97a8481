//! Cell and header formatting ahead of layout.
//!
//! Before widths are computed, every cell and header label is stringified
//! and run through its column's formatter callback (when one is registered).
//! The renderer then only ever sees plain strings, so width computation and
//! alignment observe exactly what will be printed.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::grid::{cell_text, Grid};

/// Text alignment within a column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    /// Left-align text (pad on the right).
    #[default]
    Left,
    /// Right-align text (pad on the left).
    Right,
    /// Center text; odd leftover space goes to the right.
    Center,
}

/// Per-column transform applied to cell or header text before layout.
pub type CellFormatter = Box<dyn Fn(&str) -> String>;

/// Per-column formatter registry for cells and headers.
///
/// Header columns without a formatter of their own fall back to the cell
/// formatter for that column.
#[derive(Default)]
pub struct Formatters {
    cells: HashMap<usize, CellFormatter>,
    headers: HashMap<usize, CellFormatter>,
}

impl Formatters {
    pub fn set_cell(&mut self, column: usize, formatter: CellFormatter) {
        self.cells.insert(column, formatter);
    }

    pub fn set_header(&mut self, column: usize, formatter: CellFormatter) {
        self.headers.insert(column, formatter);
    }

    fn format_cell(&self, column: usize, text: String) -> String {
        match self.cells.get(&column) {
            Some(f) => f(&text),
            None => text,
        }
    }

    fn format_header(&self, column: usize, text: String) -> String {
        match self.headers.get(&column).or_else(|| self.cells.get(&column)) {
            Some(f) => f(&text),
            None => text,
        }
    }
}

/// A grid reduced to display strings, ready for width computation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormattedGrid {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl FormattedGrid {
    /// Stringifies and formats every cell and header label of `grid`.
    pub fn from_grid(grid: &Grid, formatters: &Formatters) -> Self {
        let headers = grid
            .headers()
            .iter()
            .enumerate()
            .map(|(i, label)| formatters.format_header(i, cell_text(label)))
            .collect();

        let rows = grid
            .rows()
            .iter()
            .map(|row| {
                row.iter()
                    .enumerate()
                    .map(|(i, cell)| formatters.format_cell(i, cell_text(cell)))
                    .collect()
            })
            .collect();

        FormattedGrid { headers, rows }
    }

    /// True when every header label is empty or whitespace, in which case no
    /// header lines are rendered at all.
    pub fn header_is_blank(&self) -> bool {
        self.headers.iter().all(|label| label.trim().is_empty())
    }
}
