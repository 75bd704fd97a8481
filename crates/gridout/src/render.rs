//! Line rendering: borders, dividers, content rows, and title embedding.
//!
//! The renderer turns resolved glyph maps, a width set, alignment, and
//! padding into the ordered text lines of the table. Structural rule: every
//! emitted line has the same display width. Blank glyphs inside a live
//! border class render as spaces to keep that invariant; a border class that
//! is suppressed outright contributes nothing to any line; a line that comes
//! out entirely blank is dropped from the output.

use std::collections::HashMap;

use crate::charmap::{BorderClass, CharMapPosition, HeaderCharMapPosition, ResolvedCharMaps};
use crate::format::{Align, FormattedGrid};
use crate::preset::Padding;
use crate::util::{
    clip_to_width, display_width, pad_center, pad_left, pad_right, truncate_with_marker,
};

/// Marker appended when a title is too long for the top border span.
const TITLE_ELLIPSIS: &str = "...";

/// Table title embedded into the top border line.
///
/// The wrapper strings (typically ANSI color escapes) are emitted around the
/// title text but contribute nothing to its measured width.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableTitle {
    text: String,
    alignment: Align,
    wrapper: Option<(String, String)>,
}

impl TableTitle {
    /// Creates a centered, unwrapped title.
    pub fn new(text: impl Into<String>) -> Self {
        TableTitle {
            text: text.into(),
            alignment: Align::Center,
            wrapper: None,
        }
    }

    /// Sets the horizontal alignment within the top border.
    pub fn aligned(mut self, alignment: Align) -> Self {
        self.alignment = alignment;
        self
    }

    /// Wraps the rendered title in start/end escape strings.
    pub fn wrapped(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.wrapper = Some((start.into(), end.into()));
        self
    }

    fn wrap(&self, text: &str) -> String {
        match &self.wrapper {
            Some((start, end)) => format!("{}{}{}", start, text, end),
            None => text.to_string(),
        }
    }
}

/// Renders the lines of one table from fully resolved layout inputs.
pub(crate) struct LineRenderer<'a> {
    glyphs: &'a ResolvedCharMaps,
    widths: &'a [usize],
    alignments: &'a HashMap<usize, Align>,
    padding: &'a Padding,
    title: Option<&'a TableTitle>,
    left_suppressed: bool,
    right_suppressed: bool,
    divider_suppressed: bool,
}

impl<'a> LineRenderer<'a> {
    pub fn new(
        glyphs: &'a ResolvedCharMaps,
        widths: &'a [usize],
        alignments: &'a HashMap<usize, Align>,
        padding: &'a Padding,
        title: Option<&'a TableTitle>,
    ) -> Self {
        LineRenderer {
            glyphs,
            widths,
            alignments,
            padding,
            title,
            left_suppressed: glyphs.is_suppressed(BorderClass::Left),
            right_suppressed: glyphs.is_suppressed(BorderClass::Right),
            divider_suppressed: glyphs.is_suppressed(BorderClass::Divider),
        }
    }

    /// Renders the complete table in line order.
    pub fn render(&self, grid: &FormattedGrid) -> Vec<String> {
        let mut lines = Vec::new();
        if self.widths.is_empty() {
            return lines;
        }

        let header_shown = !grid.header_is_blank();

        if let Some(top) = self.top_border(header_shown) {
            lines.push(top);
        }

        if header_shown {
            lines.push(self.header_line(&grid.headers));
            // No divider dangles under the header of a zero-row table.
            if !grid.rows.is_empty() {
                if let Some(divider) = self.header_divider() {
                    lines.push(divider);
                }
            }
        }

        for (i, row) in grid.rows.iter().enumerate() {
            if i > 0 {
                if let Some(divider) = self.row_divider() {
                    lines.push(divider);
                }
            }
            lines.push(self.row_line(row));
        }

        if let Some(bottom) = self.bottom_border() {
            lines.push(bottom);
        }

        lines
    }

    /// The top border, with the title embedded when one is set.
    ///
    /// A blank top border with a title becomes a standalone title line padded
    /// over the table width; a blank top border without one is omitted.
    pub fn top_border(&self, header_shown: bool) -> Option<String> {
        let (left, joint, horizontal, right) = if header_shown {
            (
                self.glyphs.header(HeaderCharMapPosition::TopLeft),
                self.glyphs.header(HeaderCharMapPosition::TopCenter),
                self.glyphs.header(HeaderCharMapPosition::BorderTop),
                self.glyphs.header(HeaderCharMapPosition::TopRight),
            )
        } else {
            (
                self.glyphs.body(CharMapPosition::TopLeft),
                self.glyphs.body(CharMapPosition::TopCenter),
                self.glyphs.body(CharMapPosition::BorderTop),
                self.glyphs.body(CharMapPosition::TopRight),
            )
        };

        let line = self.rule_line(left, joint, horizontal, right);
        match (line.trim().is_empty(), self.title) {
            (true, Some(title)) => Some(self.standalone_title_line(title)),
            (true, None) => None,
            (false, Some(title)) => Some(self.embed_title(&line, title)),
            (false, None) => Some(line),
        }
    }

    pub fn header_line(&self, headers: &[String]) -> String {
        self.content_line(
            headers,
            self.glyphs.header(HeaderCharMapPosition::BorderLeft),
            self.glyphs.header(HeaderCharMapPosition::Divider),
            self.glyphs.header(HeaderCharMapPosition::BorderRight),
        )
    }

    pub fn header_divider(&self) -> Option<String> {
        let line = self.rule_line(
            self.glyphs.header(HeaderCharMapPosition::BottomLeft),
            self.glyphs.header(HeaderCharMapPosition::BottomCenter),
            self.glyphs.header(HeaderCharMapPosition::BorderBottom),
            self.glyphs.header(HeaderCharMapPosition::BottomRight),
        );
        (!line.trim().is_empty()).then_some(line)
    }

    pub fn row_divider(&self) -> Option<String> {
        let line = self.rule_line(
            self.glyphs.body(CharMapPosition::MiddleLeft),
            self.glyphs.body(CharMapPosition::MiddleCenter),
            self.glyphs.body(CharMapPosition::DividerX),
            self.glyphs.body(CharMapPosition::MiddleRight),
        );
        (!line.trim().is_empty()).then_some(line)
    }

    pub fn row_line(&self, cells: &[String]) -> String {
        self.content_line(
            cells,
            self.glyphs.body(CharMapPosition::BorderLeft),
            self.glyphs.body(CharMapPosition::DividerY),
            self.glyphs.body(CharMapPosition::BorderRight),
        )
    }

    pub fn bottom_border(&self) -> Option<String> {
        let line = self.rule_line(
            self.glyphs.body(CharMapPosition::BottomLeft),
            self.glyphs.body(CharMapPosition::BottomCenter),
            self.glyphs.body(CharMapPosition::BorderBottom),
            self.glyphs.body(CharMapPosition::BottomRight),
        );
        (!line.trim().is_empty()).then_some(line)
    }

    /// Display width of every rendered line.
    pub fn total_width(&self) -> usize {
        let pad = self.pad_width();
        let mut width: usize = self.widths.iter().map(|w| w + pad).sum();
        if !self.divider_suppressed {
            width += self.widths.len().saturating_sub(1);
        }
        if !self.left_suppressed {
            width += 1;
        }
        if !self.right_suppressed {
            width += 1;
        }
        width
    }

    fn pad_width(&self) -> usize {
        display_width(&self.padding.left) + display_width(&self.padding.right)
    }

    /// Builds a horizontal rule: corner + per-column horizontal run + joints.
    fn rule_line(
        &self,
        left: Option<char>,
        joint: Option<char>,
        horizontal: Option<char>,
        right: Option<char>,
    ) -> String {
        let pad = self.pad_width();
        let mut line = String::new();

        if !self.left_suppressed {
            line.push(left.unwrap_or(' '));
        }
        for (i, &width) in self.widths.iter().enumerate() {
            if i > 0 && !self.divider_suppressed {
                line.push(joint.unwrap_or(' '));
            }
            line.extend(std::iter::repeat_n(horizontal.unwrap_or(' '), width + pad));
        }
        if !self.right_suppressed {
            line.push(right.unwrap_or(' '));
        }

        line
    }

    /// Builds a content line: padded cell slots flanked by borders and
    /// separated by the vertical divider.
    fn content_line(
        &self,
        cells: &[String],
        left: Option<char>,
        divider: Option<char>,
        right: Option<char>,
    ) -> String {
        let empty = String::new();
        let mut line = String::new();

        if !self.left_suppressed {
            line.push(left.unwrap_or(' '));
        }
        for (i, &width) in self.widths.iter().enumerate() {
            if i > 0 && !self.divider_suppressed {
                line.push(divider.unwrap_or(' '));
            }
            let text = cells.get(i).unwrap_or(&empty);
            let aligned = match self.alignments.get(&i).copied().unwrap_or_default() {
                Align::Left => pad_right(text, width),
                Align::Right => pad_left(text, width),
                Align::Center => pad_center(text, width),
            };
            line.push_str(&self.padding.left);
            line.push_str(&aligned);
            line.push_str(&self.padding.right);
        }
        if !self.right_suppressed {
            line.push(right.unwrap_or(' '));
        }

        line
    }

    /// Overlays the title onto a rendered border line.
    fn embed_title(&self, line: &str, title: &TableTitle) -> String {
        let chars: Vec<char> = line.chars().collect();
        let span = chars.len();
        let available = span.saturating_sub(2);
        let text = truncate_with_marker(&title.text, available, TITLE_ELLIPSIS);
        let text_width = display_width(&text);
        // The 3-character truncation floor can overshoot a very narrow span;
        // clip so the line stays as wide as the rest of the frame.
        if text_width >= span {
            return title.wrap(&clip_to_width(&text, span));
        }

        let start = match title.alignment {
            Align::Left => 1,
            Align::Center => (span - text_width) / 2,
            Align::Right => span - text_width - 1,
        };

        let mut out = String::new();
        out.extend(&chars[..start]);
        out.push_str(&title.wrap(&text));
        out.extend(&chars[start + text_width..]);
        out
    }

    /// Renders the title on its own line, space-padded to the table width.
    fn standalone_title_line(&self, title: &TableTitle) -> String {
        let span = self.total_width();
        let text = truncate_with_marker(&title.text, span, TITLE_ELLIPSIS);
        let text_width = display_width(&text);
        if text_width >= span {
            return title.wrap(&clip_to_width(&text, span));
        }

        let remaining = span - text_width;
        let (left, right) = match title.alignment {
            Align::Left => (0, remaining),
            Align::Right => (remaining, 0),
            Align::Center => (remaining / 2, remaining - remaining / 2),
        };

        let mut out = String::new();
        out.extend(std::iter::repeat_n(' ', left));
        out.push_str(&title.wrap(&text));
        out.extend(std::iter::repeat_n(' ', right));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charmap::CharMap;
    use crate::preset::TableFormat;

    fn resolved(format: TableFormat) -> ResolvedCharMaps {
        ResolvedCharMaps::new(format.char_map(), format.header_char_map())
    }

    fn grid(headers: &[&str], rows: &[&[&str]]) -> FormattedGrid {
        FormattedGrid {
            headers: headers.iter().map(|s| s.to_string()).collect(),
            rows: rows
                .iter()
                .map(|row| row.iter().map(|s| s.to_string()).collect())
                .collect(),
        }
    }

    #[test]
    fn default_preset_small_table() {
        let maps = resolved(TableFormat::Default);
        let widths = vec![1, 2];
        let alignments = HashMap::new();
        let padding = Padding::default();
        let renderer = LineRenderer::new(&maps, &widths, &alignments, &padding, None);

        let lines = renderer.render(&grid(&["A", "B"], &[&["x", "yy"]]));
        assert_eq!(
            lines,
            vec![
                "----------",
                "| A | B  |",
                "----------",
                "| x | yy |",
                "----------",
            ]
        );
    }

    #[test]
    fn alternative_preset_small_table() {
        let maps = resolved(TableFormat::Alternative);
        let widths = vec![1, 2];
        let alignments = HashMap::new();
        let padding = Padding::default();
        let renderer = LineRenderer::new(&maps, &widths, &alignments, &padding, None);

        let lines = renderer.render(&grid(&["A", "B"], &[&["x", "yy"]]));
        assert_eq!(
            lines,
            vec![
                "+---+----+",
                "| A | B  |",
                "+---+----+",
                "| x | yy |",
                "+---+----+",
            ]
        );
    }

    #[test]
    fn markdown_preset_small_table() {
        let maps = resolved(TableFormat::Markdown);
        let widths = vec![1, 2];
        let alignments = HashMap::new();
        let padding = Padding::default();
        let renderer = LineRenderer::new(&maps, &widths, &alignments, &padding, None);

        let lines = renderer.render(&grid(&["A", "B"], &[&["x", "yy"], &["z", "w"]]));
        assert_eq!(
            lines,
            vec!["| A | B  |", "|---|----|", "| x | yy |", "| z | w  |"]
        );
    }

    #[test]
    fn minimal_preset_small_table() {
        let maps = resolved(TableFormat::Minimal);
        let widths = vec![1, 2];
        let alignments = HashMap::new();
        let padding = TableFormat::Minimal.padding();
        let renderer = LineRenderer::new(&maps, &widths, &alignments, &padding, None);

        let lines = renderer.render(&grid(&["A", "B"], &[&["x", "yy"]]));
        assert_eq!(lines, vec!["A B  ", "-----", "x yy "]);
    }

    #[test]
    fn all_lines_share_one_width() {
        for format in [
            TableFormat::Default,
            TableFormat::Minimal,
            TableFormat::Alternative,
            TableFormat::Markdown,
        ] {
            let maps = resolved(format);
            let widths = vec![4, 2, 7];
            let alignments = HashMap::new();
            let padding = format.padding();
            let renderer = LineRenderer::new(&maps, &widths, &alignments, &padding, None);

            let lines = renderer.render(&grid(
                &["One", "B", "Three"],
                &[&["a", "bb", "c"], &["dd", "e", "ff"]],
            ));
            for line in &lines {
                assert_eq!(
                    display_width(line),
                    renderer.total_width(),
                    "{:?}: line {:?}",
                    format,
                    line
                );
            }
        }
    }

    #[test]
    fn blank_header_skips_header_lines() {
        let maps = resolved(TableFormat::Default);
        let widths = vec![1];
        let alignments = HashMap::new();
        let padding = Padding::default();
        let renderer = LineRenderer::new(&maps, &widths, &alignments, &padding, None);

        let lines = renderer.render(&grid(&[""], &[&["x"], &["y"]]));
        assert_eq!(lines, vec!["-----", "| x |", "-----", "| y |", "-----"]);
    }

    #[test]
    fn zero_row_grid_has_no_dangling_divider() {
        let maps = resolved(TableFormat::Default);
        let widths = vec![4];
        let alignments = HashMap::new();
        let padding = Padding::default();
        let renderer = LineRenderer::new(&maps, &widths, &alignments, &padding, None);

        let lines = renderer.render(&grid(&["Name"], &[]));
        assert_eq!(lines, vec!["--------", "| Name |", "--------"]);
    }

    #[test]
    fn empty_width_set_renders_nothing() {
        let maps = resolved(TableFormat::Default);
        let widths = vec![];
        let alignments = HashMap::new();
        let padding = Padding::default();
        let renderer = LineRenderer::new(&maps, &widths, &alignments, &padding, None);

        assert!(renderer.render(&grid(&[], &[])).is_empty());
    }

    #[test]
    fn alignment_pads_cells() {
        let maps = resolved(TableFormat::Default);
        let widths = vec![5, 5, 5];
        let alignments =
            HashMap::from([(0, Align::Left), (1, Align::Right), (2, Align::Center)]);
        let padding = Padding::default();
        let renderer = LineRenderer::new(&maps, &widths, &alignments, &padding, None);

        let line = renderer.row_line(&["ab".into(), "cd".into(), "ef".into()]);
        assert_eq!(line, "| ab    |    cd |  ef   |");
    }

    #[test]
    fn title_embeds_centered_in_top_border() {
        let maps = resolved(TableFormat::Default);
        let widths = vec![8, 8];
        let alignments = HashMap::new();
        let padding = Padding::default();
        let title = TableTitle::new("HQ");
        let renderer = LineRenderer::new(&maps, &widths, &alignments, &padding, Some(&title));

        let top = renderer.top_border(true).unwrap();
        // Width 23; "HQ" centered at offset 10.
        assert_eq!(top, "----------HQ-----------");
    }

    #[test]
    fn title_alignment_left_and_right() {
        let maps = resolved(TableFormat::Default);
        let widths = vec![8, 8];
        let alignments = HashMap::new();
        let padding = Padding::default();

        let left = TableTitle::new("HQ").aligned(Align::Left);
        let renderer = LineRenderer::new(&maps, &widths, &alignments, &padding, Some(&left));
        assert_eq!(renderer.top_border(true).unwrap(), "-HQ--------------------");

        let right = TableTitle::new("HQ").aligned(Align::Right);
        let renderer = LineRenderer::new(&maps, &widths, &alignments, &padding, Some(&right));
        assert_eq!(renderer.top_border(true).unwrap(), "--------------------HQ-");
    }

    #[test]
    fn long_title_truncates_with_ellipsis() {
        let maps = resolved(TableFormat::Default);
        let widths = vec![3];
        let alignments = HashMap::new();
        let padding = Padding::default();
        let title = TableTitle::new("A very long table title");
        let renderer = LineRenderer::new(&maps, &widths, &alignments, &padding, Some(&title));

        let top = renderer.top_border(true).unwrap();
        assert!(top.contains("..."));
        assert!(top.contains("A v"));
    }

    #[test]
    fn title_overshooting_a_narrow_span_is_clipped_to_it() {
        let maps = resolved(TableFormat::Default);
        let widths = vec![1];
        let alignments = HashMap::new();
        let padding = Padding::default();
        let title = TableTitle::new("ABCDEFGH");
        let renderer = LineRenderer::new(&maps, &widths, &alignments, &padding, Some(&title));

        // Frame span is 5; the truncation floor yields "ABC..." (6 wide),
        // which must be clipped back to the span.
        let top = renderer.top_border(true).unwrap();
        assert_eq!(top, "ABC..");
        assert_eq!(display_width(&top), renderer.total_width());
    }

    #[test]
    fn title_wrapper_excluded_from_width() {
        let maps = resolved(TableFormat::Default);
        let widths = vec![8, 8];
        let alignments = HashMap::new();
        let padding = Padding::default();
        let title = TableTitle::new("HQ").wrapped("\u{1b}[31m", "\u{1b}[0m");
        let renderer = LineRenderer::new(&maps, &widths, &alignments, &padding, Some(&title));

        let top = renderer.top_border(true).unwrap();
        assert_eq!(display_width(&top), renderer.total_width());
        assert!(top.contains("\u{1b}[31mHQ\u{1b}[0m"));
    }

    #[test]
    fn borderless_title_gets_standalone_line() {
        let maps = resolved(TableFormat::Minimal);
        let widths = vec![4, 4];
        let alignments = HashMap::new();
        let padding = TableFormat::Minimal.padding();
        let title = TableTitle::new("HQ");
        let renderer = LineRenderer::new(&maps, &widths, &alignments, &padding, Some(&title));

        let top = renderer.top_border(true).unwrap();
        // Table width is (4+1) + (4+1) = 10; "HQ" centered.
        assert_eq!(top, "    HQ    ");
    }

    #[test]
    fn custom_map_with_blank_slot_renders_space() {
        // Left border defined only for content lines: rule lines keep the
        // slot as a space so the table stays rectangular.
        let body = CharMap::new()
            .set(CharMapPosition::BorderLeft, '|')
            .set(CharMapPosition::BorderRight, '|')
            .set(CharMapPosition::DividerX, '-');
        let maps = ResolvedCharMaps::new(body, None);
        let widths = vec![1];
        let alignments = HashMap::new();
        let padding = Padding::default();
        let renderer = LineRenderer::new(&maps, &widths, &alignments, &padding, None);

        let lines = renderer.render(&grid(&[""], &[&["x"], &["y"]]));
        assert_eq!(lines, vec!["| x |", " --- ", "| y |"]);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::preset::TableFormat;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn rendered_lines_always_rectangular(
            widths in proptest::collection::vec(1usize..10, 1..5),
            rows in proptest::collection::vec(
                proptest::collection::vec("[a-z]{0,3}", 1..5),
                1..5,
            ),
        ) {
            let maps = ResolvedCharMaps::new(
                TableFormat::Default.char_map(),
                TableFormat::Default.header_char_map(),
            );
            let alignments = HashMap::new();
            let padding = Padding::default();

            let grid = FormattedGrid {
                headers: (0..widths.len()).map(|i| format!("h{}", i)).collect(),
                rows: rows
                    .iter()
                    .map(|row| {
                        (0..widths.len())
                            .map(|i| row.get(i).cloned().unwrap_or_default())
                            .collect()
                    })
                    .collect(),
            };
            // Widths must dominate content for the invariant to hold.
            let widths: Vec<usize> = widths
                .iter()
                .enumerate()
                .map(|(i, &w)| {
                    let content = grid
                        .rows
                        .iter()
                        .map(|r| display_width(&r[i]))
                        .chain(std::iter::once(display_width(&grid.headers[i])))
                        .max()
                        .unwrap_or(0);
                    w.max(content)
                })
                .collect();
            let renderer = LineRenderer::new(&maps, &widths, &alignments, &padding, None);

            let lines = renderer.render(&grid);
            prop_assert!(!lines.is_empty());
            for line in &lines {
                prop_assert_eq!(display_width(line), renderer.total_width());
            }
        }

        #[test]
        fn suppressed_divider_leaves_no_vertical_glyphs(
            rows in proptest::collection::vec(
                proptest::collection::vec("[a-z]{1,4}", 2..4),
                1..4,
            ),
        ) {
            let maps = ResolvedCharMaps::new(
                TableFormat::Minimal.char_map(),
                TableFormat::Minimal.header_char_map(),
            );
            let alignments = HashMap::new();
            let padding = TableFormat::Minimal.padding();
            let columns = rows.iter().map(|r| r.len()).max().unwrap_or(0);
            let widths: Vec<usize> = (0..columns)
                .map(|i| {
                    rows.iter()
                        .filter_map(|r| r.get(i))
                        .map(|cell| display_width(cell))
                        .max()
                        .unwrap_or(1)
                })
                .collect();
            let renderer = LineRenderer::new(&maps, &widths, &alignments, &padding, None);

            let grid = FormattedGrid {
                headers: vec![String::new(); widths.len()],
                rows: rows.clone(),
            };
            for line in renderer.render(&grid) {
                prop_assert!(!line.contains('|'));
                prop_assert!(!line.trim().is_empty());
            }
        }
    }
}
