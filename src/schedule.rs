//! Crontab schedule for the scraper job
//!
//! The crontab holds a single line: `<cron expr> cd <workdir> && <runner>`.
//! Only the expression in front is ever edited; the command part is
//! regenerated from settings on every write.

use tracing::warn;

use crate::error::{self, Result};

/// A named schedule choice offered by the CLI and the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    pub name: &'static str,
    pub label: &'static str,
    pub expression: &'static str,
}

pub const PRESETS: &[Preset] = &[
    Preset {
        name: "every-30-minutes",
        label: "Every 30 minutes",
        expression: "*/30 * * * *",
    },
    Preset {
        name: "hourly",
        label: "Every hour",
        expression: "0 * * * *",
    },
    Preset {
        name: "every-2-hours",
        label: "Every 2 hours",
        expression: "0 */2 * * *",
    },
    Preset {
        name: "every-4-hours",
        label: "Every 4 hours",
        expression: "0 */4 * * *",
    },
    Preset {
        name: "every-6-hours",
        label: "Every 6 hours",
        expression: "0 */6 * * *",
    },
    Preset {
        name: "every-8-hours",
        label: "Every 8 hours",
        expression: "0 */8 * * *",
    },
    Preset {
        name: "every-12-hours",
        label: "Every 12 hours",
        expression: "0 */12 * * *",
    },
];

pub fn preset(name: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|p| p.name == name)
}

/// Human label for an expression when it matches a preset
pub fn describe(expression: &str) -> Option<&'static str> {
    PRESETS
        .iter()
        .find(|p| p.expression == expression)
        .map(|p| p.label)
}

/// Current cron expression: the text of the first line before ` cd <workdir>`.
///
/// Returns `None` for an empty crontab.
pub fn current(content: &str, workdir: &str) -> Option<String> {
    let first = content.lines().find(|l| !l.trim().is_empty())?;
    let marker = format!(" cd {workdir}");
    let expression = match first.find(&marker) {
        Some(idx) => &first[..idx],
        None => first,
    };
    Some(expression.trim().to_string())
}

/// Full crontab content for `expression`
pub fn render(expression: &str, workdir: &str, runner: &str) -> String {
    format!("{} cd {workdir} && {runner}\n", expression.trim())
}

/// Cron expression for a daily run.
///
/// `HH:MM` gives `M H * * *`; a bare hour gives `0 H * * *`.
pub fn daily(time: &str) -> Result<String> {
    let time = time.trim();
    let (hour, minute) = match time.split_once(':') {
        Some((h, m)) => (h, m),
        None => (time, "0"),
    };
    let hour = parse_field(hour, 23, time)?;
    let minute = parse_field(minute, 59, time)?;
    Ok(format!("{minute} {hour} * * *"))
}

/// Validate a custom expression before writing it.
///
/// Only emptiness is rejected; an unusual field count is left to cron.
pub fn custom(expression: &str) -> Result<String> {
    let expression = expression.trim();
    if expression.is_empty() {
        return Err(error::input::invalid("cron expression is empty"));
    }
    let fields = expression.split_whitespace().count();
    if fields != 5 {
        warn!(expression, fields, "cron expression does not have five fields");
    }
    Ok(expression.to_string())
}

/// Validate an `HH:MM` clock time and return it normalized to two digits.
pub fn clock_time(time: &str) -> Result<String> {
    let time = time.trim();
    let (hour, minute) = time
        .split_once(':')
        .ok_or_else(|| error::input::invalid(format!("'{time}' is not in HH:MM format")))?;
    let hour = parse_field(hour, 23, time)?;
    let minute = parse_field(minute, 59, time)?;
    Ok(format!("{hour:02}:{minute:02}"))
}

fn parse_field(field: &str, max: u32, whole: &str) -> Result<u32> {
    let field = field.trim();
    match field.parse::<u32>() {
        Ok(v) if v <= max && !field.is_empty() => Ok(v),
        _ => Err(error::input::invalid(format!("'{whole}' is not a valid time"))),
    }
}
