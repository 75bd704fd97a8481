//! Fluent table builder and export entry point.
//!
//! [`TableBuilder`] accumulates data and layout configuration, then renders
//! on [`export`](TableBuilder::export). Nothing is computed eagerly: widths,
//! glyph resolution, and metadata expansion all happen at export time, so
//! configuration order never matters.

use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;

use crate::charmap::{CharMap, HeaderCharMap, ResolvedCharMaps};
use crate::error::TableError;
use crate::format::{Align, CellFormatter, FormattedGrid, Formatters};
use crate::grid::Grid;
use crate::meta::{MetaRow, MetaRowPosition, TableStats};
use crate::preset::{Padding, TableFormat};
use crate::render::{LineRenderer, TableTitle};
use crate::width::column_widths;

/// Builds and exports one table.
///
/// # Example
///
/// ```rust
/// use gridout::{TableBuilder, TableFormat};
/// use serde_json::json;
///
/// let out = TableBuilder::from_rows(vec![
///     vec![json!("Airi Satou"), json!("Accountant")],
///     vec![json!("Ashton Cox"), json!("Junior Technical Author")],
/// ])
/// .with_headers(vec!["Name".into(), "Position".into()])
/// .with_format(TableFormat::Markdown)
/// .export()
/// .unwrap();
///
/// assert!(out.starts_with("| Name"));
/// ```
#[derive(Default)]
pub struct TableBuilder {
    grid: Grid,
    format: TableFormat,
    char_map: Option<CharMap>,
    header_char_map: Option<HeaderCharMap>,
    title: Option<TableTitle>,
    min_widths: HashMap<usize, usize>,
    alignments: HashMap<usize, Align>,
    formatters: Formatters,
    pad_left: Option<String>,
    pad_right: Option<String>,
    meta_top: Vec<MetaRow>,
    meta_bottom: Vec<MetaRow>,
    trim_trailing: bool,
}

impl TableBuilder {
    /// Starts from an empty grid.
    pub fn new() -> Self {
        TableBuilder::default()
    }

    /// Starts from flat data rows without header labels.
    pub fn from_rows(rows: Vec<Vec<Value>>) -> Self {
        TableBuilder {
            grid: Grid::from_rows(rows),
            ..TableBuilder::default()
        }
    }

    /// Starts from named columns plus data rows.
    pub fn from_table(columns: Vec<String>, rows: Vec<Vec<Value>>) -> Self {
        TableBuilder {
            grid: Grid::from_table(columns, rows),
            ..TableBuilder::default()
        }
    }

    /// Starts from serializable records; field names become header labels.
    pub fn from_records<T: Serialize>(records: &[T]) -> Result<Self, TableError> {
        Ok(TableBuilder {
            grid: Grid::from_records(records)?,
            ..TableBuilder::default()
        })
    }

    /// Replaces the header labels.
    pub fn with_headers(mut self, headers: Vec<String>) -> Self {
        self.grid
            .set_headers(headers.into_iter().map(Value::String).collect());
        self
    }

    /// Appends one data row.
    pub fn add_row(mut self, row: Vec<Value>) -> Self {
        self.grid.push_row(row);
        self
    }

    /// Selects a format preset.
    pub fn with_format(mut self, format: TableFormat) -> Self {
        self.format = format;
        self
    }

    /// Supplies a custom body glyph map.
    ///
    /// A custom map, even a partial one, replaces the preset's maps entirely;
    /// the preset then only contributes its padding defaults.
    pub fn with_char_map(mut self, map: CharMap) -> Self {
        self.char_map = Some(map);
        self
    }

    /// Supplies a custom header glyph map, overriding the body map over the
    /// header block.
    pub fn with_header_char_map(mut self, map: HeaderCharMap) -> Self {
        self.header_char_map = Some(map);
        self
    }

    /// Sets the table title, embedded into the top border.
    pub fn with_title(mut self, title: TableTitle) -> Self {
        self.title = Some(title);
        self
    }

    /// Sets a minimum rendered width for one column.
    pub fn with_min_width(mut self, column: usize, width: usize) -> Self {
        self.min_widths.insert(column, width);
        self
    }

    /// Sets minimum rendered widths for several columns at once.
    pub fn with_min_widths(mut self, widths: impl IntoIterator<Item = (usize, usize)>) -> Self {
        self.min_widths.extend(widths);
        self
    }

    /// Sets the text alignment for one column.
    pub fn with_text_alignment(mut self, column: usize, alignment: Align) -> Self {
        self.alignments.insert(column, alignment);
        self
    }

    /// Sets text alignments for several columns at once.
    pub fn with_text_alignments(
        mut self,
        alignments: impl IntoIterator<Item = (usize, Align)>,
    ) -> Self {
        self.alignments.extend(alignments);
        self
    }

    /// Registers a formatter applied to every cell of one column (and to its
    /// header label, unless a header formatter is also registered).
    pub fn with_formatter(mut self, column: usize, f: impl Fn(&str) -> String + 'static) -> Self {
        self.formatters.set_cell(column, Box::new(f) as CellFormatter);
        self
    }

    /// Registers a formatter applied to one column's header label only.
    pub fn with_header_formatter(
        mut self,
        column: usize,
        f: impl Fn(&str) -> String + 'static,
    ) -> Self {
        self.formatters.set_header(column, Box::new(f) as CellFormatter);
        self
    }

    /// Replaces both padding strings.
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.pad_left = Some(padding.left);
        self.pad_right = Some(padding.right);
        self
    }

    /// Replaces the left padding string only.
    pub fn with_padding_left(mut self, left: impl Into<String>) -> Self {
        self.pad_left = Some(left.into());
        self
    }

    /// Replaces the right padding string only.
    pub fn with_padding_right(mut self, right: impl Into<String>) -> Self {
        self.pad_right = Some(right.into());
        self
    }

    /// Adds a metadata row above or below the table frame.
    pub fn with_metadata_row(mut self, position: MetaRowPosition, row: MetaRow) -> Self {
        match position {
            MetaRowPosition::Top => self.meta_top.push(row),
            MetaRowPosition::Bottom => self.meta_bottom.push(row),
        }
        self
    }

    /// Adds a template metadata row; see [`MetaRow::template`].
    pub fn with_metadata_template(
        self,
        position: MetaRowPosition,
        template: impl Into<String>,
        args: Vec<String>,
    ) -> Self {
        self.with_metadata_row(position, MetaRow::template(template, args))
    }

    /// Drops all-empty trailing columns from the rendered output.
    pub fn trim_trailing_columns(mut self, trim: bool) -> Self {
        self.trim_trailing = trim;
        self
    }

    /// Renders the table to one string, newline-terminated.
    ///
    /// An empty grid exports as the empty string, never as an error.
    /// Registered metadata rows still render around the (absent) frame, and
    /// their template errors still surface.
    pub fn export(&self) -> Result<String, TableError> {
        let lines = self.export_lines()?;
        if lines.is_empty() {
            return Ok(String::new());
        }
        let mut out = lines.join("\n");
        out.push('\n');
        Ok(out)
    }

    /// Renders the table as individual lines.
    pub fn export_lines(&self) -> Result<Vec<String>, TableError> {
        let formatted = FormattedGrid::from_grid(&self.grid, &self.formatters);
        let widths = column_widths(&formatted, &self.min_widths, self.trim_trailing);

        let stats = TableStats {
            row_count: self.grid.row_count(),
            column_count: widths.len(),
        };

        let mut lines = Vec::new();
        for row in &self.meta_top {
            lines.push(row.render(&stats)?);
        }

        if !widths.is_empty() {
            let maps = self.resolved_maps();
            let padding = self.padding();
            let renderer = LineRenderer::new(
                &maps,
                &widths,
                &self.alignments,
                &padding,
                self.title.as_ref(),
            );
            lines.extend(renderer.render(&formatted));
        }

        for row in &self.meta_bottom {
            lines.push(row.render(&stats)?);
        }

        Ok(lines)
    }

    /// Custom maps win over preset maps. Supplying only a body map also drops
    /// the preset's header map: the header block then reads the custom map
    /// through the usual fallback.
    fn resolved_maps(&self) -> ResolvedCharMaps {
        let body = match &self.char_map {
            Some(map) => map.clone(),
            None => self.format.char_map(),
        };
        let header = match &self.header_char_map {
            Some(map) => Some(map.clone()),
            None if self.char_map.is_some() => None,
            None => self.format.header_char_map(),
        };
        ResolvedCharMaps::new(body, header)
    }

    fn padding(&self) -> Padding {
        let mut padding = self.format.padding();
        if let Some(left) = &self.pad_left {
            padding.left = left.clone();
        }
        if let Some(right) = &self.pad_right {
            padding.right = right.clone();
        }
        padding
    }
}
