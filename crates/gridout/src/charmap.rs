//! Glyph position maps for borders and dividers.
//!
//! A table frame is described by a mapping from named positions to single
//! display glyphs. Two maps cooperate: the body map covers every line of the
//! table, and an optional header map overrides the positions that make up the
//! header block (its top corners, its vertical borders, and the divider line
//! under it), falling back to the body map where it is silent.
//!
//! Maps are sparse on the way in and total on the way out: looking up any
//! position always succeeds, with `None` standing for the blank glyph. A
//! whole border class (left border, right border, vertical dividers) whose
//! glyphs are all blank is *suppressed* — dropped from every rendered line
//! instead of being rendered as whitespace.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Named glyph positions of the table body.
///
/// The nine corner/joint positions follow the grid:
///
/// ```text
/// TopLeft    ─ TopCenter    ─ TopRight
/// MiddleLeft ─ MiddleCenter ─ MiddleRight
/// BottomLeft ─ BottomCenter ─ BottomRight
/// ```
///
/// `DividerX` is the horizontal glyph of inter-row divider lines and
/// `DividerY` the vertical glyph between cells on content lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CharMapPosition {
    TopLeft,
    TopCenter,
    TopRight,
    MiddleLeft,
    MiddleCenter,
    MiddleRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
    BorderTop,
    BorderRight,
    BorderBottom,
    BorderLeft,
    DividerX,
    DividerY,
}

/// Named glyph positions of the header block.
///
/// `Bottom*` positions shape the divider line between the header and the
/// first data row; `Divider` separates header labels on the content line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HeaderCharMapPosition {
    TopLeft,
    TopCenter,
    TopRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
    BorderTop,
    BorderRight,
    BorderBottom,
    BorderLeft,
    Divider,
}

impl HeaderCharMapPosition {
    /// The body position this header position falls back to when unset.
    pub fn body_fallback(self) -> CharMapPosition {
        match self {
            HeaderCharMapPosition::TopLeft => CharMapPosition::TopLeft,
            HeaderCharMapPosition::TopCenter => CharMapPosition::TopCenter,
            HeaderCharMapPosition::TopRight => CharMapPosition::TopRight,
            HeaderCharMapPosition::BottomLeft => CharMapPosition::MiddleLeft,
            HeaderCharMapPosition::BottomCenter => CharMapPosition::MiddleCenter,
            HeaderCharMapPosition::BottomRight => CharMapPosition::MiddleRight,
            HeaderCharMapPosition::BorderTop => CharMapPosition::BorderTop,
            HeaderCharMapPosition::BorderRight => CharMapPosition::BorderRight,
            HeaderCharMapPosition::BorderBottom => CharMapPosition::DividerX,
            HeaderCharMapPosition::BorderLeft => CharMapPosition::BorderLeft,
            HeaderCharMapPosition::Divider => CharMapPosition::DividerY,
        }
    }
}

/// Sparse glyph map for the table body.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CharMap {
    glyphs: HashMap<CharMapPosition, char>,
}

impl CharMap {
    /// Creates an empty map (every position blank).
    pub fn new() -> Self {
        CharMap::default()
    }

    /// Sets the glyph for a position.
    pub fn set(mut self, position: CharMapPosition, glyph: char) -> Self {
        self.glyphs.insert(position, glyph);
        self
    }

    /// Returns the glyph for a position, `None` meaning blank.
    pub fn get(&self, position: CharMapPosition) -> Option<char> {
        self.glyphs.get(&position).copied()
    }

    /// True when no position has a glyph.
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

impl FromIterator<(CharMapPosition, char)> for CharMap {
    fn from_iter<I: IntoIterator<Item = (CharMapPosition, char)>>(iter: I) -> Self {
        CharMap {
            glyphs: iter.into_iter().collect(),
        }
    }
}

/// Sparse glyph map for the header block.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HeaderCharMap {
    glyphs: HashMap<HeaderCharMapPosition, char>,
}

impl HeaderCharMap {
    /// Creates an empty map (every position falls back to the body map).
    pub fn new() -> Self {
        HeaderCharMap::default()
    }

    /// Sets the glyph for a position.
    pub fn set(mut self, position: HeaderCharMapPosition, glyph: char) -> Self {
        self.glyphs.insert(position, glyph);
        self
    }

    /// Returns the glyph for a position, `None` meaning unset.
    pub fn get(&self, position: HeaderCharMapPosition) -> Option<char> {
        self.glyphs.get(&position).copied()
    }
}

impl FromIterator<(HeaderCharMapPosition, char)> for HeaderCharMap {
    fn from_iter<I: IntoIterator<Item = (HeaderCharMapPosition, char)>>(iter: I) -> Self {
        HeaderCharMap {
            glyphs: iter.into_iter().collect(),
        }
    }
}

/// Vertical border classes that can be suppressed as a whole.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BorderClass {
    /// Left table border: left corners, joints and the content-line border.
    Left,
    /// Right table border.
    Right,
    /// Inter-column dividers: center joints and the content-line separator.
    Divider,
}

/// Fully resolved glyph lookup over a body map and an optional header map.
///
/// Resolution is total: every lookup yields either a glyph or the blank
/// sentinel (`None`); rendering never encounters a missing position.
#[derive(Clone, Debug)]
pub struct ResolvedCharMaps {
    body: CharMap,
    header: Option<HeaderCharMap>,
}

impl ResolvedCharMaps {
    pub fn new(body: CharMap, header: Option<HeaderCharMap>) -> Self {
        ResolvedCharMaps { body, header }
    }

    /// Body glyph at `position`, `None` meaning blank.
    pub fn body(&self, position: CharMapPosition) -> Option<char> {
        self.body.get(position)
    }

    /// Header glyph at `position`: the header map's entry when one exists and
    /// defines it, else the corresponding body position.
    pub fn header(&self, position: HeaderCharMapPosition) -> Option<char> {
        self.header
            .as_ref()
            .and_then(|map| map.get(position))
            .or_else(|| self.body.get(position.body_fallback()))
    }

    /// Whether every glyph that would render `class` is blank.
    ///
    /// Each slot of the class is consulted the way the renderer would: header
    /// lines prefer the header map with body fallback, body lines read the
    /// body map directly.
    pub fn is_suppressed(&self, class: BorderClass) -> bool {
        self.class_glyphs(class).iter().all(|g| g.is_none())
    }

    fn class_glyphs(&self, class: BorderClass) -> [Option<char>; 6] {
        match class {
            BorderClass::Left => [
                self.header(HeaderCharMapPosition::TopLeft),
                self.header(HeaderCharMapPosition::BorderLeft),
                self.header(HeaderCharMapPosition::BottomLeft),
                self.body(CharMapPosition::MiddleLeft),
                self.body(CharMapPosition::BorderLeft),
                self.body(CharMapPosition::BottomLeft),
            ],
            BorderClass::Right => [
                self.header(HeaderCharMapPosition::TopRight),
                self.header(HeaderCharMapPosition::BorderRight),
                self.header(HeaderCharMapPosition::BottomRight),
                self.body(CharMapPosition::MiddleRight),
                self.body(CharMapPosition::BorderRight),
                self.body(CharMapPosition::BottomRight),
            ],
            BorderClass::Divider => [
                self.header(HeaderCharMapPosition::TopCenter),
                self.header(HeaderCharMapPosition::Divider),
                self.header(HeaderCharMapPosition::BottomCenter),
                self.body(CharMapPosition::MiddleCenter),
                self.body(CharMapPosition::DividerY),
                self.body(CharMapPosition::BottomCenter),
            ],
        }
    }
}
