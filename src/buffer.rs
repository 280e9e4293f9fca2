//! Line buffer: a file's text as an ordered sequence of lines.
//!
//! Every editor in this crate is a pure function from one `LineBuffer` to
//! another. Splitting on `\n` and joining with `\n` is lossless, so a buffer
//! that is not modified writes back byte-for-byte.

use std::fmt;
use std::ops::Range;

/// Owned snapshot of a text file, one entry per line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LineBuffer {
    lines: Vec<String>,
}

impl LineBuffer {
    /// Split text on `\n`. A trailing newline produces a final empty line.
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text.split('\n').map(str::to_string).collect(),
        }
    }

    /// Join lines back with `\n`.
    pub fn to_text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// New buffer with `range` replaced by `replacement`.
    ///
    /// Lines outside the range are copied verbatim and keep their order.
    pub fn splice(&self, range: Range<usize>, replacement: Vec<String>) -> Self {
        let end = range.end.min(self.lines.len());
        let start = range.start.min(end);
        let mut lines = Vec::with_capacity(self.lines.len() - (end - start) + replacement.len());
        lines.extend_from_slice(&self.lines[..start]);
        lines.extend(replacement);
        lines.extend_from_slice(&self.lines[end..]);
        Self { lines }
    }

    /// New buffer with a single line replaced.
    pub fn replace_line(&self, index: usize, text: String) -> Self {
        self.splice(index..index + 1, vec![text])
    }
}

impl fmt::Display for LineBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl From<&str> for LineBuffer {
    fn from(text: &str) -> Self {
        Self::from_text(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_is_lossless() {
        for text in ["", "a", "a\n", "a\n\nb\n", "\n\n", "x: 1\r\ny: 2\r\n"] {
            assert_eq!(LineBuffer::from_text(text).to_text(), text);
        }
    }

    #[test]
    fn test_trailing_newline_is_empty_last_line() {
        let buffer = LineBuffer::from_text("a\nb\n");
        assert_eq!(buffer.len(), 3);
        assert_eq!(buffer.line(2), Some(""));
    }

    #[test]
    fn test_splice_preserves_outside_lines() {
        let buffer = LineBuffer::from_text("h\n1\n2\n3\nt");
        let spliced = buffer.splice(1..4, vec!["x".to_string()]);
        assert_eq!(spliced.to_text(), "h\nx\nt");
        // source untouched
        assert_eq!(buffer.to_text(), "h\n1\n2\n3\nt");
    }

    #[test]
    fn test_splice_clamps_range() {
        let buffer = LineBuffer::from_text("a\nb");
        let spliced = buffer.splice(1..10, vec!["c".to_string(), "d".to_string()]);
        assert_eq!(spliced.to_text(), "a\nc\nd");
    }

    #[test]
    fn test_replace_line() {
        let buffer = LineBuffer::from_text("a\nb\nc");
        assert_eq!(buffer.replace_line(1, "B".to_string()).to_text(), "a\nB\nc");
    }
}
