//! Named format presets.
//!
//! A preset is a bundle of default glyph maps and padding. A caller-supplied
//! glyph map, even a partial one, always takes precedence over the preset's
//! maps; the preset then only contributes padding defaults.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::charmap::{CharMap, CharMapPosition, HeaderCharMap, HeaderCharMapPosition};

/// Left/right padding strings wrapped around every cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Padding {
    pub left: String,
    pub right: String,
}

impl Padding {
    pub fn new(left: impl Into<String>, right: impl Into<String>) -> Self {
        Padding {
            left: left.into(),
            right: right.into(),
        }
    }
}

impl Default for Padding {
    fn default() -> Self {
        Padding::new(" ", " ")
    }
}

/// Named table format presets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableFormat {
    /// Full-width dash rules around the header and every row, `|` verticals.
    #[default]
    Default,
    /// No frame at all: space-separated columns with one dash rule under the
    /// header.
    Minimal,
    /// Classic `+----+----+` frames.
    Alternative,
    /// GitHub-flavored markdown: header, `|---|` divider, one line per row.
    Markdown,
}

use CharMapPosition as P;
use HeaderCharMapPosition as H;

static DEFAULT_MAP: Lazy<CharMap> = Lazy::new(|| {
    [
        (P::TopLeft, '-'),
        (P::TopCenter, '-'),
        (P::TopRight, '-'),
        (P::MiddleLeft, '-'),
        (P::MiddleCenter, '-'),
        (P::MiddleRight, '-'),
        (P::BottomLeft, '-'),
        (P::BottomCenter, '-'),
        (P::BottomRight, '-'),
        (P::BorderTop, '-'),
        (P::BorderBottom, '-'),
        (P::DividerX, '-'),
        (P::BorderLeft, '|'),
        (P::BorderRight, '|'),
        (P::DividerY, '|'),
    ]
    .into_iter()
    .collect()
});

static ALTERNATIVE_MAP: Lazy<CharMap> = Lazy::new(|| {
    [
        (P::TopLeft, '+'),
        (P::TopCenter, '+'),
        (P::TopRight, '+'),
        (P::MiddleLeft, '+'),
        (P::MiddleCenter, '+'),
        (P::MiddleRight, '+'),
        (P::BottomLeft, '+'),
        (P::BottomCenter, '+'),
        (P::BottomRight, '+'),
        (P::BorderTop, '-'),
        (P::BorderBottom, '-'),
        (P::DividerX, '-'),
        (P::BorderLeft, '|'),
        (P::BorderRight, '|'),
        (P::DividerY, '|'),
    ]
    .into_iter()
    .collect()
});

static MARKDOWN_MAP: Lazy<CharMap> = Lazy::new(|| {
    [
        (P::BorderLeft, '|'),
        (P::BorderRight, '|'),
        (P::DividerY, '|'),
    ]
    .into_iter()
    .collect()
});

static MARKDOWN_HEADER_MAP: Lazy<HeaderCharMap> = Lazy::new(|| {
    [
        (H::BorderLeft, '|'),
        (H::BorderRight, '|'),
        (H::Divider, '|'),
        (H::BottomLeft, '|'),
        (H::BottomCenter, '|'),
        (H::BottomRight, '|'),
        (H::BorderBottom, '-'),
    ]
    .into_iter()
    .collect()
});

static MINIMAL_HEADER_MAP: Lazy<HeaderCharMap> =
    Lazy::new(|| [(H::BorderBottom, '-')].into_iter().collect());

impl TableFormat {
    /// Default body glyph map for this preset.
    pub fn char_map(&self) -> CharMap {
        match self {
            TableFormat::Default => DEFAULT_MAP.clone(),
            TableFormat::Alternative => ALTERNATIVE_MAP.clone(),
            TableFormat::Markdown => MARKDOWN_MAP.clone(),
            TableFormat::Minimal => CharMap::new(),
        }
    }

    /// Default header glyph map, where the preset distinguishes the header
    /// block from the body.
    pub fn header_char_map(&self) -> Option<HeaderCharMap> {
        match self {
            TableFormat::Markdown => Some(MARKDOWN_HEADER_MAP.clone()),
            TableFormat::Minimal => Some(MINIMAL_HEADER_MAP.clone()),
            _ => None,
        }
    }

    /// Default cell padding for this preset.
    pub fn padding(&self) -> Padding {
        match self {
            TableFormat::Minimal => Padding::new("", " "),
            _ => Padding::default(),
        }
    }
}
