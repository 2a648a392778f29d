//! Source locations for diagnostics.
//!
//! Spans are computed once, when an error or warning is raised, from the
//! byte offsets the parser tracks. Lines and columns are stored zero-based
//! and printed one-based.

use std::fmt;

use serde::Serialize;

/// A single point in a source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct SourceLocation {
    /// Byte offset from the start of the source.
    pub offset: usize,
    /// Zero-based line number.
    pub line: usize,
    /// Zero-based column, counted in characters.
    pub column: usize,
}

impl SourceLocation {
    /// Locate `offset` inside `source`.
    ///
    /// Offsets past the end of `source` are clamped to its length, and
    /// offsets inside a multi-byte character are rounded down to the
    /// character boundary.
    #[must_use]
    pub fn locate(source: &str, offset: usize) -> Self {
        let mut offset = offset.min(source.len());
        while !source.is_char_boundary(offset) {
            offset -= 1;
        }

        let before = &source[..offset];
        let line = before.matches('\n').count();
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        let column = source[line_start..offset].chars().count();

        Self {
            offset,
            line,
            column,
        }
    }
}

/// A half-open range `[start, end)` of a source text, optionally tagged
/// with the URL the text was loaded from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SourceSpan {
    /// Where the source came from, if known.
    pub url: Option<String>,
    /// First location covered by the span.
    pub start: SourceLocation,
    /// First location after the span.
    pub end: SourceLocation,
    /// The covered text.
    pub text: String,
}

impl SourceSpan {
    /// Build a span over `source[start..end]`.
    #[must_use]
    pub fn new(source: &str, url: Option<&str>, start: usize, end: usize) -> Self {
        let start = SourceLocation::locate(source, start);
        let end = SourceLocation::locate(source, end.max(start.offset));
        Self {
            url: url.map(str::to_owned),
            text: source[start.offset..end.offset].to_owned(),
            start,
            end,
        }
    }

    /// Number of bytes covered by the span.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end.offset - self.start.offset
    }

    /// Whether the span covers no text (a point, e.g. end of input).
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for SourceSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}",
            self.url.as_deref().unwrap_or("-"),
            self.start.line + 1,
            self.start.column + 1
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locate_first_line() {
        let loc = SourceLocation::locate(".a > .b", 4);
        assert_eq!(loc.line, 0);
        assert_eq!(loc.column, 4);
    }

    #[test]
    fn test_locate_after_newline() {
        let loc = SourceLocation::locate(".a,\n  .b", 6);
        assert_eq!(loc.line, 1);
        assert_eq!(loc.column, 2);
    }

    #[test]
    fn test_locate_clamps_past_end() {
        let loc = SourceLocation::locate("abc", 99);
        assert_eq!(loc.offset, 3);
        assert_eq!(loc.column, 3);
    }

    #[test]
    fn test_locate_counts_characters_not_bytes() {
        // "é" is two bytes in UTF-8
        let loc = SourceLocation::locate(".é.b", 4);
        assert_eq!(loc.column, 3);
    }

    #[test]
    fn test_span_text_and_display() {
        let span = SourceSpan::new("a >> b", Some("style.scss"), 2, 4);
        assert_eq!(span.text, ">>");
        assert_eq!(span.len(), 2);
        assert!(!span.is_empty());
        assert_eq!(span.to_string(), "style.scss:1:3");
    }

    #[test]
    fn test_span_without_url() {
        let span = SourceSpan::new("a", None, 1, 1);
        assert!(span.is_empty());
        assert_eq!(span.to_string(), "-:1:2");
    }
}
