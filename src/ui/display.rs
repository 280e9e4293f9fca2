//! Text renderers for listings and status screens
//!
//! Renderers return strings so the CLI and the menu print the same thing.

use std::fmt::Write;

use console::Style;

use crate::keywords::KeywordDocument;
use crate::notify::{self, NotifyStatus, PushWindow};
use crate::platform::serializer::render_entry;
use crate::platform::{PlatformEntry, PlatformSection};
use crate::schedule;

fn on_off(enabled: bool) -> String {
    if enabled {
        Style::new().green().bold().apply_to("[on] ").to_string()
    } else {
        Style::new().dim().apply_to("[off]").to_string()
    }
}

fn header(text: &str) -> String {
    Style::new().bold().yellow().apply_to(text).to_string()
}

/// `n. [on] name (id)`, numbered from 1
pub fn platform_line(position: usize, entry: &PlatformEntry) -> String {
    format!(
        "{position:>2}. {} {} {}",
        on_off(entry.enabled),
        Style::new().bold().apply_to(&entry.name),
        Style::new().cyan().apply_to(format!("({})", entry.id))
    )
}

/// The lines `entry` will be written as, for confirmation before adding
pub fn platform_preview(entry: &PlatformEntry) -> String {
    let mut out = String::new();
    for line in render_entry(entry) {
        let _ = writeln!(out, "{}", Style::new().green().apply_to(line));
    }
    out
}

pub fn platforms(section: &PlatformSection) -> String {
    let enabled = section.entries.iter().filter(|e| e.enabled).count();
    let mut out = header(&format!(
        "Platforms ({enabled} enabled / {} total)",
        section.entries.len()
    ));
    out.push('\n');
    if section.entries.is_empty() {
        out.push_str("  (no platforms configured)\n");
    }
    for (i, entry) in section.entries.iter().enumerate() {
        let _ = writeln!(out, "{}", platform_line(i + 1, entry));
    }
    out
}

pub fn keywords(document: &KeywordDocument) -> String {
    let mut out = header(&format!(
        "Keywords ({} in {} groups)",
        document.keyword_count(),
        document.groups().len()
    ));
    out.push('\n');
    if document.is_empty() {
        out.push_str("  (empty: all news is monitored)\n");
        return out;
    }

    let mut current_group = None;
    for keyword in document.numbered() {
        if current_group != Some(keyword.group) {
            current_group = Some(keyword.group);
            let _ = writeln!(
                out,
                "{}",
                Style::new()
                    .bold()
                    .apply_to(format!("Group {}:", keyword.group + 1))
            );
        }
        let _ = writeln!(out, "  {:>3}. {}", keyword.position, keyword.text);
    }
    out
}

/// One line per group: `n. a, b, c... (k words)`
pub fn keyword_groups(document: &KeywordDocument) -> String {
    let mut out = String::new();
    for (i, group) in document.groups().iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>2}. {} {}",
            i + 1,
            group.preview(3),
            Style::new().dim().apply_to(format!("({} words)", group.len()))
        );
    }
    out
}

pub fn notify_status(status: &NotifyStatus) -> String {
    let mut out = header("Notifications");
    out.push('\n');
    let _ = writeln!(out, "  {} master switch", on_off(status.enabled));
    for channel in &status.channels {
        let state = match (channel.present, channel.configured) {
            (_, true) => Style::new().green().apply_to("configured").to_string(),
            (true, false) => Style::new().dim().apply_to("not configured").to_string(),
            (false, false) => Style::new().dim().apply_to("not in config file").to_string(),
        };
        let _ = writeln!(out, "  {:<10} {state}", channel.label);
    }
    out
}

/// Email detail lines from `(key, label, value)` triples; secrets are masked.
pub fn email_details(fields: &[(&str, &str, Option<String>)]) -> String {
    let mut out = header("Email");
    out.push('\n');
    for (key, label, value) in fields {
        let shown = match value {
            Some(v) => notify::display_value(key, v),
            None => Style::new().dim().apply_to("(missing)").to_string(),
        };
        let _ = writeln!(out, "  {:<12} {shown}", format!("{label}:"));
    }
    out
}

pub fn push_window(window: &PushWindow) -> String {
    let mut out = header("Push window");
    out.push('\n');
    let _ = writeln!(out, "  {} only push inside the time range", on_off(window.enabled));
    let _ = writeln!(
        out,
        "  {} - {}",
        window.start.as_deref().unwrap_or("?"),
        window.end.as_deref().unwrap_or("?")
    );
    out
}

pub fn schedule(expression: Option<&str>) -> String {
    match expression {
        None => format!("{} (not set)", header("Schedule:")),
        Some(expr) => match schedule::describe(expr) {
            Some(label) => format!(
                "{} {} {}",
                header("Schedule:"),
                Style::new().bold().apply_to(expr),
                Style::new().dim().apply_to(format!("({label})"))
            ),
            None => format!("{} {}", header("Schedule:"), Style::new().bold().apply_to(expr)),
        },
    }
}

pub fn success(message: &str) -> String {
    format!("{} {message}", Style::new().green().bold().apply_to("✓"))
}

pub fn warning(message: &str) -> String {
    format!("{} {message}", Style::new().yellow().bold().apply_to("!"))
}
