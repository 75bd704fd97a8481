//! Column width computation.
//!
//! Widths are derived from the formatted grid on every export: each column is
//! as wide as its widest cell, its header label, or its configured minimum,
//! whichever is largest. Nothing is cached across builder mutations.

use std::collections::HashMap;

use crate::format::FormattedGrid;
use crate::util::display_width;

/// Computes the rendered width of every column.
///
/// With `trim_trailing` set, width entries that are exactly zero are dropped
/// from the end of the list, stopping at the first non-zero column. The
/// trimmed length becomes the authoritative column count for rendering; the
/// underlying grid is left untouched.
pub fn column_widths(
    grid: &FormattedGrid,
    min_widths: &HashMap<usize, usize>,
    trim_trailing: bool,
) -> Vec<usize> {
    let columns = grid.headers.len();
    let mut widths = Vec::with_capacity(columns);

    for i in 0..columns {
        let header = display_width(&grid.headers[i]);
        let cells = grid
            .rows
            .iter()
            .map(|row| display_width(&row[i]))
            .max()
            .unwrap_or(0);
        let min = min_widths.get(&i).copied().unwrap_or(0);
        widths.push(header.max(cells).max(min));
    }

    if trim_trailing {
        while widths.last() == Some(&0) {
            widths.pop();
        }
    }

    widths
}
