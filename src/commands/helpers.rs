//! Command helper utilities

use inquire::Confirm;
use serde::Serialize;

use crate::error::{self, Result};
use crate::input;

/// Ask for confirmation unless `assume_yes` is set.
///
/// Esc / Ctrl-C answers no.
pub fn confirm(prompt: &str, assume_yes: bool) -> Result<bool> {
    if assume_yes {
        return Ok(true);
    }
    let answer = Confirm::new(prompt)
        .with_default(false)
        .with_help_message("Press 'y' to confirm, Enter or 'n' to cancel")
        .prompt_skippable()?;
    Ok(answer.unwrap_or(false))
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Parse 1-based numbers given as one or more CLI values.
pub fn indices(args: &[String]) -> Result<Vec<usize>> {
    input::parse_indices(&input::join_args(args))
}

/// Parse `true` / `false` (also yes/no, on/off, 1/0).
pub fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        other => Err(error::input::invalid(format!("'{other}' is not true or false"))),
    }
}
