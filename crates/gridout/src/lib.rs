//! # Gridout - Terminal Table Layout Library
//!
//! `gridout` renders tabular data as aligned plain-text tables for terminals,
//! logs, and markdown documents. Data goes in from flat rows, named columns,
//! or any `serde`-serializable records; a fluent builder configures the frame,
//! and `export` produces the finished text.
//!
//! ## Core Concepts
//!
//! - [`TableBuilder`]: Fluent entry point; collects data and configuration,
//!   renders on [`export`](TableBuilder::export)
//! - [`TableFormat`]: Named presets (Default/Minimal/Alternative/Markdown)
//! - [`CharMap`] / [`HeaderCharMap`]: Position-keyed glyph maps for fully
//!   custom frames; header positions fall back to the body map
//! - [`TableTitle`]: Title embedded into the top border line
//! - [`MetaRow`]: Free-text lines above or below the frame, with `{0}`-style
//!   templates and live `{ROW_COUNT}`/`{COLUMN_COUNT}` placeholders
//!
//! ## Quick Start
//!
//! ```rust
//! use gridout::{TableBuilder, TableFormat};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Employee {
//!     name: String,
//!     office: String,
//!     age: u32,
//! }
//!
//! let staff = vec![
//!     Employee { name: "Airi Satou".into(), office: "Tokyo".into(), age: 33 },
//!     Employee { name: "Ashton Cox".into(), office: "London".into(), age: 66 },
//! ];
//!
//! let table = TableBuilder::from_records(&staff)
//!     .unwrap()
//!     .with_format(TableFormat::Alternative)
//!     .export()
//!     .unwrap();
//! println!("{}", table);
//! ```
//!
//! ## Custom Frames
//!
//! When no preset fits, supply a glyph map directly; unset positions render
//! blank, and a border column whose glyphs are all blank disappears from the
//! output instead of leaving whitespace:
//!
//! ```rust
//! use gridout::{CharMap, CharMapPosition, TableBuilder};
//! use serde_json::json;
//!
//! let map = CharMap::new()
//!     .set(CharMapPosition::DividerY, '│')
//!     .set(CharMapPosition::DividerX, '─');
//!
//! let table = TableBuilder::from_table(
//!     vec!["Name".into(), "Office".into()],
//!     vec![vec![json!("Airi Satou"), json!("Tokyo")]],
//! )
//! .with_char_map(map)
//! .export()
//! .unwrap();
//! println!("{}", table);
//! ```

mod builder;
mod charmap;
mod error;
mod format;
mod grid;
mod meta;
mod preset;
mod render;
mod util;
mod width;

pub use builder::TableBuilder;
pub use charmap::{
    BorderClass, CharMap, CharMapPosition, HeaderCharMap, HeaderCharMapPosition, ResolvedCharMaps,
};
pub use error::TableError;
pub use format::{Align, CellFormatter, Formatters};
pub use grid::Grid;
pub use meta::{MetaRow, MetaRowPosition, TableStats, COLUMN_COUNT, ROW_COUNT};
pub use preset::{Padding, TableFormat};
pub use render::TableTitle;
pub use util::display_width;
