//! Encoding of platform entries back into the section
//!
//! Each entry becomes exactly two lines. Enabled:
//!
//! ```text
//!   - id: "weibo"
//!     name: "微博"
//! ```
//!
//! Disabled entries are commented out, with the `name:` line kept aligned
//! with the uncommented layout:
//!
//! ```text
//!   # - id: "zhihu"
//!   #   name: "知乎"
//! ```

use tracing::debug;

use super::{PlatformEntry, PlatformSection};
use crate::buffer::LineBuffer;
use crate::common::string_utils::quote;

const INDENT: &str = "  ";

/// The two lines an entry is written as
pub fn render_entry(entry: &PlatformEntry) -> [String; 2] {
    let (item_prefix, name_prefix) = if entry.enabled {
        (INDENT.to_string(), format!("{INDENT}  "))
    } else {
        (format!("{INDENT}# "), format!("{INDENT}#   "))
    };
    [
        format!("{item_prefix}- id: {}", quote(&entry.id)),
        format!("{name_prefix}name: {}", quote(&entry.name)),
    ]
}

impl PlatformSection {
    /// Write the entries back over the span this section was parsed from.
    ///
    /// The header line, everything above it and everything from `end_line`
    /// on are copied verbatim. Items are regenerated from scratch, so extra
    /// lines and inline comments inside the old items are dropped. A section
    /// running to the end of the file keeps the file's final newline.
    pub fn splice_into(self, buffer: &LineBuffer) -> LineBuffer {
        let mut generated: Vec<String> = self.entries.iter().flat_map(render_entry).collect();
        let at_eof = self.end_line >= buffer.len() && self.end_line > self.start_line + 1;
        if at_eof && buffer.lines().last().is_some_and(String::is_empty) {
            generated.push(String::new());
        }
        debug!(
            start_line = self.start_line,
            end_line = self.end_line,
            lines = generated.len(),
            "rewriting platforms section"
        );
        buffer.splice(self.start_line + 1..self.end_line, generated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_enabled_entry() {
        let lines = render_entry(&PlatformEntry::new("weibo", "微博"));
        assert_eq!(lines[0], r#"  - id: "weibo""#);
        assert_eq!(lines[1], r#"    name: "微博""#);
    }

    #[test]
    fn test_render_disabled_entry() {
        let lines = render_entry(&PlatformEntry::new("zhihu", "知乎").disabled());
        assert_eq!(lines[0], r#"  # - id: "zhihu""#);
        assert_eq!(lines[1], r#"  #   name: "知乎""#);
    }

    #[test]
    fn test_section_at_end_keeps_final_newline() {
        let buffer = LineBuffer::from_text("platforms:\n  - id: \"a\"\n    name: \"A\"\n");
        let section = PlatformSection::parse(&buffer).expect("section");
        assert_eq!(
            section.splice_into(&buffer).to_text(),
            "platforms:\n  - id: \"a\"\n    name: \"A\"\n"
        );

        let buffer = LineBuffer::from_text("platforms:\n");
        let mut section = PlatformSection::parse(&buffer).expect("section");
        section.append(PlatformEntry::new("b", "B"));
        assert_eq!(
            section.splice_into(&buffer).to_text(),
            "platforms:\n  - id: \"b\"\n    name: \"B\"\n"
        );
    }

    #[test]
    fn test_render_escapes_quotes() {
        let lines = render_entry(&PlatformEntry::new("x", r#"say "hi""#));
        assert_eq!(lines[1], r#"    name: "say \"hi\"""#);
    }
}
