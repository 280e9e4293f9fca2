//! String utility functions for the line-oriented YAML subset trendctl edits.
//!
//! These helpers know just enough about YAML scalars to read and write
//! `key: value  # comment` lines: quoting, inline comments and the `#`
//! markers used to disable list items.

/// Byte index where a trailing inline comment starts, including the
/// whitespace run before the `#`.
///
/// A `#` only opens a comment when it is outside quotes and preceded by
/// whitespace, so `"C#"` and `https://host/#anchor` are left alone.
pub fn inline_comment_start(s: &str) -> Option<usize> {
    let mut in_single = false;
    let mut in_double = false;
    let mut escaped = false;
    let mut prev_ws: Option<usize> = None;

    for (i, c) in s.char_indices() {
        if in_double {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_double = false;
            }
            prev_ws = None;
            continue;
        }
        if in_single {
            if c == '\'' {
                in_single = false;
            }
            prev_ws = None;
            continue;
        }
        match c {
            '"' => in_double = true,
            '\'' => in_single = true,
            '#' => {
                if let Some(start) = prev_ws {
                    return Some(start);
                }
            }
            c if c.is_whitespace() => {
                prev_ws.get_or_insert(i);
                continue;
            }
            _ => {}
        }
        prev_ws = None;
    }
    None
}

/// Byte index of the first `needle` that is not inside a quoted scalar.
///
/// A quote only opens a scalar at the start of a token, so the apostrophe
/// in `it's` is plain text.
pub fn find_unquoted(s: &str, needle: &str) -> Option<usize> {
    let mut quote: Option<char> = None;
    let mut escaped = false;
    let mut prev: Option<char> = None;

    for (i, c) in s.char_indices() {
        match quote {
            Some('"') if escaped => escaped = false,
            Some('"') if c == '\\' => escaped = true,
            Some(q) if c == q => quote = None,
            Some(_) => {}
            None => {
                let token_start = prev.is_none_or(|p| p.is_whitespace() || p == ':');
                if (c == '"' || c == '\'') && token_start {
                    quote = Some(c);
                } else if s[i..].starts_with(needle) {
                    return Some(i);
                }
            }
        }
        prev = Some(c);
    }
    None
}

/// Remove a trailing inline comment and surrounding whitespace.
pub fn strip_inline_comment(s: &str) -> &str {
    match inline_comment_start(s) {
        Some(idx) => s[..idx].trim(),
        None => s.trim(),
    }
}

/// Strip surrounding quotes from a scalar.
///
/// Balanced double quotes are unescaped, balanced single quotes collapse
/// `''`. Anything else just loses stray leading/trailing quote characters.
pub fn unquote(s: &str) -> String {
    let s = s.trim();
    if s.len() >= 2 && s.starts_with('"') && s.ends_with('"') {
        let inner = &s[1..s.len() - 1];
        let mut out = String::with_capacity(inner.len());
        let mut chars = inner.chars();
        while let Some(c) = chars.next() {
            if c == '\\' {
                match chars.next() {
                    Some(next) => out.push(next),
                    None => out.push('\\'),
                }
            } else {
                out.push(c);
            }
        }
        return out;
    }
    if s.len() >= 2 && s.starts_with('\'') && s.ends_with('\'') {
        return s[1..s.len() - 1].replace("''", "'");
    }
    s.trim_matches('"').trim_matches('\'').to_string()
}

/// Render a value as a double-quoted YAML scalar.
pub fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        if c == '"' || c == '\\' {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
    out
}

/// Clean a raw value: drop the inline comment, then the quotes.
pub fn clean_value(raw: &str) -> String {
    unquote(strip_inline_comment(raw))
}

/// Whether the trimmed line is a comment.
pub fn is_comment(line: &str) -> bool {
    line.trim_start().starts_with('#')
}

/// Remove every leading `#` marker (and the whitespace between them).
pub fn strip_comment_markers(line: &str) -> &str {
    line.trim_start_matches(|c: char| c == '#' || c.is_whitespace())
        .trim_end()
}

/// Width of the leading whitespace of a line, in bytes.
pub fn indent_width(line: &str) -> usize {
    line.len() - line.trim_start().len()
}
