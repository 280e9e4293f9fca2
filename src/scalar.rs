//! Scalar `key: value` lines addressed by dotted key paths
//!
//! Lookup walks the lines once, keeping a stack of `(indent, key)` frames
//! for the mapping keys currently open. A line matches when the keys on the
//! stack end with the requested path, so `start` finds the first `start:`
//! anywhere while `push_window.time_range.start` only matches inside the
//! `push_window` / `time_range` blocks.
//!
//! Blank lines and comment lines never open or close a block.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::buffer::LineBuffer;
use crate::common::string_utils::{
    clean_value, indent_width, inline_comment_start, is_comment, quote,
};
use crate::error::{self, Result, TrendctlError};

/// Dotted path to a key, e.g. `push_window.time_range.start`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPath {
    segments: Vec<String>,
}

impl KeyPath {
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Last segment: the key written on the matched line
    pub fn leaf(&self) -> &str {
        self.segments.last().map_or("", String::as_str)
    }
}

impl FromStr for KeyPath {
    type Err = TrendctlError;

    fn from_str(s: &str) -> Result<Self> {
        let segments: Vec<String> = s.split('.').map(|p| p.trim().to_string()).collect();
        if segments.iter().any(|p| p.is_empty() || p.contains(char::is_whitespace)) {
            return Err(error::input::invalid(format!("'{s}' is not a valid key path")));
        }
        Ok(Self { segments })
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("."))
    }
}

/// A value to write into a `key: value` line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScalarValue {
    /// Written double-quoted
    Text(String),
    /// Written as a bare `true` / `false`
    Bool(bool),
}

impl ScalarValue {
    pub fn text(value: impl Into<String>) -> Self {
        ScalarValue::Text(value.into())
    }

    fn render(&self) -> String {
        match self {
            ScalarValue::Text(s) => quote(s),
            ScalarValue::Bool(b) => b.to_string(),
        }
    }
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarValue::Text(s) => f.write_str(s),
            ScalarValue::Bool(b) => write!(f, "{b}"),
        }
    }
}

/// A mapping-key line, with byte offsets into the original line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct KeyLine<'a> {
    /// Column of the key (after any `- ` list marker)
    column: usize,
    key: &'a str,
    /// Byte offset just past the `:`
    value_start: usize,
}

fn key_line(line: &str) -> Option<KeyLine<'_>> {
    let mut column = indent_width(line);
    let mut body = &line[column..];
    if body.is_empty() || body.starts_with('#') {
        return None;
    }
    if let Some(rest) = body.strip_prefix("- ") {
        let item_body = rest.trim_start();
        column += body.len() - item_body.len();
        body = item_body;
    }

    let colon = body.find(':')?;
    let key = &body[..colon];
    let after = &body[colon + 1..];
    let well_formed = !key.is_empty()
        && !key.contains(char::is_whitespace)
        && !key.starts_with(['"', '\'', '-'])
        && (after.is_empty() || after.starts_with(char::is_whitespace));
    if !well_formed {
        return None;
    }

    Some(KeyLine {
        column,
        key,
        value_start: column + colon + 1,
    })
}

/// Find the line holding `path`: its index and parsed key line.
fn locate<'a>(path: &KeyPath, buffer: &'a LineBuffer) -> Option<(usize, KeyLine<'a>)> {
    let wanted = path.segments();
    let mut frames: Vec<(usize, &str)> = Vec::new();

    for (idx, line) in buffer.lines().iter().enumerate() {
        if line.trim().is_empty() || is_comment(line) {
            continue;
        }
        let Some(found) = key_line(line) else {
            let indent = indent_width(line);
            while frames.last().is_some_and(|(col, _)| *col >= indent) {
                frames.pop();
            }
            continue;
        };

        while frames.last().is_some_and(|(col, _)| *col >= found.column) {
            frames.pop();
        }
        frames.push((found.column, found.key));

        if frames.len() >= wanted.len()
            && frames[frames.len() - wanted.len()..]
                .iter()
                .map(|(_, key)| *key)
                .eq(wanted.iter().map(String::as_str))
        {
            return Some((idx, found));
        }
    }
    None
}

/// Read the value at `path`.
///
/// `None` means the key does not exist; `Some("")` means it exists with an
/// empty value. Inline comments and surrounding quotes are removed.
pub fn get(path: &KeyPath, buffer: &LineBuffer) -> Option<String> {
    let (idx, found) = locate(path, buffer)?;
    let line = buffer.line(idx)?;
    let value = clean_value(&line[found.value_start..]);
    debug!(key = %path, line = idx + 1, "read scalar");
    Some(value)
}

/// Read a boolean value; anything but `true` reads as false.
pub fn get_bool(path: &KeyPath, buffer: &LineBuffer) -> Option<bool> {
    get(path, buffer).map(|v| v.eq_ignore_ascii_case("true"))
}

/// Write `value` at `path`, returning the updated buffer.
///
/// The indentation before the key and any trailing inline comment are kept
/// verbatim. A missing key is an error and leaves nothing modified.
pub fn set(path: &KeyPath, value: &ScalarValue, buffer: &LineBuffer) -> Result<LineBuffer> {
    let (idx, found) =
        locate(path, buffer).ok_or_else(|| error::section::key_not_found(path.to_string()))?;
    let line = buffer
        .line(idx)
        .ok_or_else(|| error::section::key_not_found(path.to_string()))?;

    let (line, eol) = match line.strip_suffix('\r') {
        Some(stripped) => (stripped, "\r"),
        None => (line, ""),
    };
    let prefix = &line[..found.column];
    let rest = &line[found.value_start..];
    let comment = inline_comment_start(rest).map_or("", |i| &rest[i..]);
    let updated = format!("{prefix}{}: {}{comment}{eol}", found.key, value.render());

    debug!(key = %path, line = idx + 1, "updated scalar");
    Ok(buffer.replace_line(idx, updated))
}
