//! Decoding of the `platforms:` section
//!
//! The section is found and decoded in one forward scan, without a YAML
//! parser. Items look like:
//!
//! ```text
//! platforms:
//!   - id: "weibo"
//!     name: "微博"
//!   # - id: "zhihu"
//!   #   name: "知乎"
//! ```
//!
//! The commented-out item is a disabled platform. The section ends at the
//! first non-blank line that starts in column 0 and is not a comment.

use tracing::{debug, warn};

use super::{ParseDiagnostic, PlatformEntry, PlatformSection, SECTION_HEADER, UNKNOWN_NAME};
use crate::buffer::LineBuffer;
use crate::common::string_utils::{clean_value, find_unquoted, strip_comment_markers};

const ITEM_MARKER: &str = "- id:";
const NAME_KEY: &str = "name:";

/// How a line inside the section is treated
#[derive(Debug, PartialEq, Eq)]
enum LineKind<'a> {
    Blank,
    SectionEnd,
    /// `body` is the item text with comment markers removed
    ItemStart { body: &'a str, enabled: bool },
    Continuation,
}

fn classify(line: &str) -> LineKind<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return LineKind::Blank;
    }

    let starts_in_column_zero = line
        .chars()
        .next()
        .is_some_and(|c| !c.is_whitespace() && c != '#');
    if starts_in_column_zero {
        return LineKind::SectionEnd;
    }

    if trimmed.starts_with(ITEM_MARKER) {
        return LineKind::ItemStart {
            body: trimmed,
            enabled: true,
        };
    }

    if trimmed.starts_with('#') {
        let body = strip_comment_markers(trimmed);
        if body.starts_with(ITEM_MARKER) {
            return LineKind::ItemStart {
                body,
                enabled: false,
            };
        }
    }

    LineKind::Continuation
}

/// Value between `id:` and an optional `name:` on the same line.
fn extract_id(body: &str) -> String {
    let Some((_, after)) = body.split_once("id:") else {
        return String::new();
    };
    let raw = find_unquoted(after, NAME_KEY).map_or(after, |i| &after[..i]);
    clean_value(raw)
}

impl PlatformSection {
    /// Locate and decode the platform section.
    ///
    /// Returns `None` when the buffer has no `platforms:` line.
    pub fn parse(buffer: &LineBuffer) -> Option<Self> {
        let lines = buffer.lines();
        let start_line = lines
            .iter()
            .position(|l| l.trim().starts_with(SECTION_HEADER))?;

        let mut entries: Vec<PlatformEntry> = Vec::new();
        let mut diagnostics = Vec::new();
        let mut current: Option<PlatformEntry> = None;
        let mut end_line = lines.len();

        for (idx, line) in lines.iter().enumerate().skip(start_line + 1) {
            match classify(line) {
                LineKind::Blank => {}
                LineKind::SectionEnd => {
                    end_line = idx;
                    break;
                }
                LineKind::ItemStart { body, enabled } => {
                    entries.extend(current.take());

                    let id = extract_id(body);
                    if id.is_empty() {
                        warn!(line = idx + 1, "skipping platform item without an id");
                        diagnostics.push(ParseDiagnostic::EmptyId { line: idx });
                        continue;
                    }
                    if entries.iter().any(|e| e.id == id) {
                        warn!(line = idx + 1, id = %id, "duplicate platform id");
                        diagnostics.push(ParseDiagnostic::DuplicateId {
                            id: id.clone(),
                            line: idx,
                        });
                    }

                    current = Some(PlatformEntry {
                        id,
                        name: UNKNOWN_NAME.to_string(),
                        enabled,
                        source_lines: vec![line.clone()],
                    });
                }
                LineKind::Continuation => {
                    let Some(entry) = current.as_mut() else {
                        continue;
                    };
                    entry.source_lines.push(line.clone());
                    if let Some(rest) = strip_comment_markers(line.trim()).strip_prefix(NAME_KEY) {
                        entry.name = clean_value(rest);
                    }
                }
            }
        }
        entries.extend(current);

        debug!(
            start_line,
            end_line,
            entries = entries.len(),
            "parsed platforms section"
        );

        Some(Self {
            entries,
            start_line,
            end_line,
            diagnostics,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(classify(""), LineKind::Blank);
        assert_eq!(classify("   "), LineKind::Blank);
        assert_eq!(classify("notification:"), LineKind::SectionEnd);
        assert_eq!(classify("# heading comment"), LineKind::Continuation);
        assert_eq!(
            classify("  - id: \"weibo\""),
            LineKind::ItemStart {
                body: "- id: \"weibo\"",
                enabled: true
            }
        );
        assert_eq!(
            classify("  # - id: \"zhihu\""),
            LineKind::ItemStart {
                body: "- id: \"zhihu\"",
                enabled: false
            }
        );
        assert_eq!(
            classify("#   - id: baidu"),
            LineKind::ItemStart {
                body: "- id: baidu",
                enabled: false
            }
        );
        assert_eq!(classify("  # - name: x"), LineKind::Continuation);
        assert_eq!(classify("    name: \"微博\""), LineKind::Continuation);
    }

    #[test]
    fn test_extract_id() {
        assert_eq!(extract_id("- id: \"weibo\""), "weibo");
        assert_eq!(extract_id("- id: 'zhihu'"), "zhihu");
        assert_eq!(extract_id("- id: baidu  # search"), "baidu");
        assert_eq!(extract_id("- id: \"ithome\" name: \"IT之家\""), "ithome");
        assert_eq!(extract_id("- id: \"rss name:tech\""), "rss name:tech");
        assert_eq!(extract_id("- id:"), "");
        assert_eq!(extract_id("- id: \"\""), "");
    }
}
