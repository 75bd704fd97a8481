//! Metadata rows above and below the table.
//!
//! Metadata rows are free-text lines emitted outside the table frame. They
//! are generated at export time, after the grid is fully built, so they can
//! quote live table statistics. Two flavors exist: a template with
//! positional `{0}`-style arguments plus `{ROW_COUNT}`/`{COLUMN_COUNT}`
//! placeholders, and an arbitrary generator closure over [`TableStats`].

use crate::error::TableError;

/// Placeholder replaced with the live data-row count.
pub const ROW_COUNT: &str = "ROW_COUNT";
/// Placeholder replaced with the live rendered-column count.
pub const COLUMN_COUNT: &str = "COLUMN_COUNT";

/// Where a metadata row is emitted relative to the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MetaRowPosition {
    /// Before the top border, in registration order.
    Top,
    /// After the bottom border, in registration order.
    Bottom,
}

/// Live table statistics handed to metadata generators.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TableStats {
    /// Number of data rows.
    pub row_count: usize,
    /// Number of rendered columns (after trailing-column trimming).
    pub column_count: usize,
}

/// A single metadata row.
pub enum MetaRow {
    /// Template with positional arguments; `{0}`, `{1}`, ... substitute the
    /// arguments, then `{ROW_COUNT}` and `{COLUMN_COUNT}` substitute live
    /// statistics. `{{` and `}}` escape literal braces.
    Template {
        template: String,
        args: Vec<String>,
    },
    /// Arbitrary generator over the table statistics.
    Generator(Box<dyn Fn(&TableStats) -> String>),
}

impl MetaRow {
    /// Builds a template row.
    pub fn template(template: impl Into<String>, args: Vec<String>) -> Self {
        MetaRow::Template {
            template: template.into(),
            args,
        }
    }

    /// Builds a generator row from a closure.
    pub fn generator(f: impl Fn(&TableStats) -> String + 'static) -> Self {
        MetaRow::Generator(Box::new(f))
    }

    /// Produces the rendered line for this row.
    ///
    /// Template errors (a positional placeholder with no matching argument,
    /// an unknown placeholder name, an unbalanced brace) surface as
    /// [`TableError::Configuration`]; they are never silently swallowed.
    pub fn render(&self, stats: &TableStats) -> Result<String, TableError> {
        match self {
            MetaRow::Template { template, args } => expand_template(template, args, stats),
            MetaRow::Generator(f) => Ok(f(stats)),
        }
    }
}

impl std::fmt::Debug for MetaRow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MetaRow::Template { template, args } => f
                .debug_struct("Template")
                .field("template", template)
                .field("args", args)
                .finish(),
            MetaRow::Generator(_) => f.write_str("Generator(..)"),
        }
    }
}

fn expand_template(
    template: &str,
    args: &[String],
    stats: &TableStats,
) -> Result<String, TableError> {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' => {
                if chars.peek() == Some(&'{') {
                    chars.next();
                    out.push('{');
                    continue;
                }
                let mut name = String::new();
                loop {
                    match chars.next() {
                        Some('}') => break,
                        Some(inner) => name.push(inner),
                        None => {
                            return Err(TableError::Configuration(format!(
                                "unterminated placeholder '{{{}' in metadata template",
                                name
                            )));
                        }
                    }
                }
                out.push_str(&substitute(&name, args, stats)?);
            }
            '}' => {
                if chars.peek() == Some(&'}') {
                    chars.next();
                    out.push('}');
                } else {
                    return Err(TableError::Configuration(
                        "unmatched '}' in metadata template".into(),
                    ));
                }
            }
            _ => out.push(c),
        }
    }

    Ok(out)
}

fn substitute(name: &str, args: &[String], stats: &TableStats) -> Result<String, TableError> {
    if name == ROW_COUNT {
        return Ok(stats.row_count.to_string());
    }
    if name == COLUMN_COUNT {
        return Ok(stats.column_count.to_string());
    }
    if !name.is_empty() && name.chars().all(|c| c.is_ascii_digit()) {
        let index: usize = name.parse().map_err(|_| {
            TableError::Configuration(format!("invalid placeholder index '{{{}}}'", name))
        })?;
        return args.get(index).cloned().ok_or_else(|| {
            TableError::Configuration(format!(
                "placeholder {{{}}} references argument {} but only {} supplied",
                name,
                index,
                args.len()
            ))
        });
    }
    Err(TableError::Configuration(format!(
        "unknown placeholder '{{{}}}' in metadata template",
        name
    )))
}
