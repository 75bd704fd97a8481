//! Text measurement and padding helpers.
//!
//! All layout math in this crate goes through [`display_width`], which counts
//! terminal columns rather than bytes or chars: CJK characters count as 2,
//! and ANSI escape sequences count as 0 so that colored cell content does not
//! disturb alignment.

use console::measure_text_width;
use unicode_width::UnicodeWidthChar;

/// Returns the display width of a string in terminal columns.
///
/// ANSI escape sequences contribute zero width; wide characters (CJK,
/// fullwidth forms) contribute two columns.
///
/// # Example
///
/// ```rust
/// use gridout::display_width;
///
/// assert_eq!(display_width("Tokyo"), 5);
/// assert_eq!(display_width("中午"), 4);
/// assert_eq!(display_width("\u{1b}[31mred\u{1b}[0m"), 3);
/// ```
pub fn display_width(s: &str) -> usize {
    measure_text_width(s)
}

/// Left-aligns `s` within `width` columns by padding on the right.
///
/// Strings already at or beyond `width` are returned unchanged; nothing is
/// ever truncated here.
pub fn pad_right(s: &str, width: usize) -> String {
    let current = display_width(s);
    if current >= width {
        return s.to_string();
    }
    let mut out = String::with_capacity(s.len() + (width - current));
    out.push_str(s);
    out.extend(std::iter::repeat_n(' ', width - current));
    out
}

/// Right-aligns `s` within `width` columns by padding on the left.
pub fn pad_left(s: &str, width: usize) -> String {
    let current = display_width(s);
    if current >= width {
        return s.to_string();
    }
    let mut out = String::with_capacity(s.len() + (width - current));
    out.extend(std::iter::repeat_n(' ', width - current));
    out.push_str(s);
    out
}

/// Centers `s` within `width` columns.
///
/// When the leftover space is odd the extra column goes to the right side.
pub fn pad_center(s: &str, width: usize) -> String {
    let current = display_width(s);
    if current >= width {
        return s.to_string();
    }
    let remaining = width - current;
    let left = remaining / 2;
    let right = remaining - left;
    let mut out = String::with_capacity(s.len() + remaining);
    out.extend(std::iter::repeat_n(' ', left));
    out.push_str(s);
    out.extend(std::iter::repeat_n(' ', right));
    out
}

/// Clips `s` to exactly `width` columns: characters past the limit are
/// dropped and any remainder (a wide character that would straddle the edge)
/// is space-filled.
pub(crate) fn clip_to_width(s: &str, width: usize) -> String {
    let mut out = String::new();
    let mut current = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if current + w > width {
            break;
        }
        out.push(c);
        current += w;
    }
    out.extend(std::iter::repeat_n(' ', width - current));
    out
}

/// Truncates `s` to fit `max_width` columns, appending `marker` when
/// truncation occurs.
///
/// At least three characters of the original string are kept whenever the
/// string has them, even if that overshoots `max_width`; a marker-only result
/// is never produced for non-empty input.
pub fn truncate_with_marker(s: &str, max_width: usize, marker: &str) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }

    let keep = max_width
        .saturating_sub(display_width(marker))
        .max(3.min(s.chars().count()));

    let mut out = String::new();
    let mut current = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if current + w > keep && current > 0 {
            break;
        }
        out.push(c);
        current += w;
    }
    out.push_str(marker);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_width_ascii() {
        assert_eq!(display_width(""), 0);
        assert_eq!(display_width("Airi Satou"), 10);
    }

    #[test]
    fn display_width_cjk() {
        assert_eq!(display_width("中午午午午c"), 11);
        assert_eq!(display_width("tab其它语言test"), 15);
    }

    #[test]
    fn display_width_ignores_csi_sequences() {
        assert_eq!(display_width("\u{1b}[31mTITLE\u{1b}[0m"), 5);
        assert_eq!(display_width("\u{1b}[1;32;40mx\u{1b}[0m"), 1);
    }

    #[test]
    fn display_width_ignores_charset_selection_sequences() {
        // ESC ( B (select ASCII charset) is not a CSI sequence but still
        // occupies no columns.
        assert_eq!(display_width("\u{1b}(Bred"), 3);
    }

    #[test]
    fn pad_right_fills_to_width() {
        assert_eq!(pad_right("abc", 5), "abc  ");
        assert_eq!(pad_right("abcde", 5), "abcde");
        assert_eq!(pad_right("abcdef", 5), "abcdef");
    }

    #[test]
    fn pad_left_fills_to_width() {
        assert_eq!(pad_left("42", 5), "   42");
    }

    #[test]
    fn pad_center_extra_space_goes_right() {
        assert_eq!(pad_center("ab", 5), " ab  ");
        assert_eq!(pad_center("ab", 6), "  ab  ");
    }

    #[test]
    fn pad_uses_display_width_for_cjk() {
        // "中午" is 4 columns wide, so only one space is added.
        assert_eq!(pad_right("中午", 5), "中午 ");
    }

    #[test]
    fn truncate_short_string_unchanged() {
        assert_eq!(truncate_with_marker("abc", 10, "..."), "abc");
    }

    #[test]
    fn truncate_appends_marker() {
        assert_eq!(truncate_with_marker("abcdefghij", 8, "..."), "abcde...");
    }

    #[test]
    fn truncate_keeps_at_least_three_chars() {
        assert_eq!(truncate_with_marker("abcdefgh", 4, "..."), "abc...");
        assert_eq!(truncate_with_marker("abcdefgh", 0, "..."), "abc...");
    }

    #[test]
    fn clip_cuts_and_pads_to_exact_width() {
        assert_eq!(clip_to_width("abcdef", 4), "abcd");
        assert_eq!(clip_to_width("ab", 4), "ab  ");
        // A wide character never straddles the clip edge.
        assert_eq!(clip_to_width("a中午", 4), "a中 ");
    }
}
