//! Notify and window command implementations

use crate::cli::{NotifyArgs, NotifySubcommand, WindowArgs, WindowSubcommand};
use crate::error::{self, Result};
use crate::notify::{self, EMAIL_FIELDS, WINDOW_END_KEY, WINDOW_START_KEY};
use crate::scalar;
use crate::schedule;
use crate::ui::{self, display};
use crate::workspace::Workspace;

use super::helpers;

pub fn run(workspace: &Workspace, args: NotifyArgs) -> Result<()> {
    match args
        .command
        .unwrap_or(NotifySubcommand::Status { json: false })
    {
        NotifySubcommand::Status { json } => status(workspace, json),
        NotifySubcommand::Toggle => toggle(workspace).map(drop),
        NotifySubcommand::Email => email(workspace),
        NotifySubcommand::Set { target, value } => set(workspace, &target, &value),
    }
}

pub fn run_window(workspace: &Workspace, args: WindowArgs) -> Result<()> {
    match args
        .command
        .unwrap_or(WindowSubcommand::Show { json: false })
    {
        WindowSubcommand::Show { json } => show_window(workspace, json),
        WindowSubcommand::Toggle => toggle_window(workspace).map(drop),
        WindowSubcommand::Start { time } => set_window_time(workspace, WINDOW_START_KEY, &time),
        WindowSubcommand::End { time } => set_window_time(workspace, WINDOW_END_KEY, &time),
    }
}

pub fn status(workspace: &Workspace, json: bool) -> Result<()> {
    let status = notify::status(&workspace.load_config()?)?;
    if json {
        return helpers::print_json(&status);
    }
    print!("{}", display::notify_status(&status));
    Ok(())
}

/// Flip the master switch. Returns the new state.
pub fn toggle(workspace: &Workspace) -> Result<bool> {
    let (enabled, updated) = notify::toggle_enabled(&workspace.load_config()?)?;
    workspace.save_config(&updated)?;
    let state = if enabled { "enabled" } else { "disabled" };
    println!("{}", ui::success(&format!("Notifications {state}")));
    Ok(enabled)
}

pub fn email(workspace: &Workspace) -> Result<()> {
    let buffer = workspace.load_config()?;
    let mut fields = Vec::with_capacity(EMAIL_FIELDS.len());
    for (key, label) in EMAIL_FIELDS {
        fields.push((*key, *label, scalar::get(&notify::key(key)?, &buffer)));
    }
    print!("{}", display::email_details(&fields));
    Ok(())
}

/// Resolve a channel name or key to the key that gets written.
pub fn resolve_target(target: &str) -> Result<&'static str> {
    if let Some(channel) = notify::channel(target) {
        return Ok(channel.key);
    }
    notify::CHANNELS
        .iter()
        .flat_map(|c| std::iter::once(&c.key).chain(c.extra_keys.iter()))
        .find(|key| **key == target)
        .copied()
        .ok_or_else(|| {
            let names: Vec<&str> = notify::CHANNELS.iter().map(|c| c.name).collect();
            error::input::invalid(format!(
                "unknown channel '{target}' (expected one of: {})",
                names.join(", ")
            ))
        })
}

pub fn set(workspace: &Workspace, target: &str, value: &str) -> Result<()> {
    let key = resolve_target(target)?;
    let updated = notify::set_text(key, value, &workspace.load_config()?)?;
    workspace.save_config(&updated)?;
    if value.trim().eq_ignore_ascii_case(notify::CLEAR_WORD) {
        println!("{}", ui::success(&format!("Cleared {key}")));
    } else {
        let shown = notify::display_value(key, value.trim());
        println!("{}", ui::success(&format!("{key} = {shown}")));
    }
    Ok(())
}

pub fn show_window(workspace: &Workspace, json: bool) -> Result<()> {
    let window = notify::window(&workspace.load_config()?)?;
    if json {
        return helpers::print_json(&window);
    }
    print!("{}", display::push_window(&window));
    Ok(())
}

pub fn toggle_window(workspace: &Workspace) -> Result<bool> {
    let (enabled, updated) = notify::toggle_window(&workspace.load_config()?)?;
    workspace.save_config(&updated)?;
    let state = if enabled { "enabled" } else { "disabled" };
    println!("{}", ui::success(&format!("Push window {state}")));
    Ok(enabled)
}

/// Write a validated `HH:MM` time to one end of the window.
pub fn set_window_time(workspace: &Workspace, key: &str, time: &str) -> Result<()> {
    let time = schedule::clock_time(time)?;
    let updated = notify::set_text(key, &time, &workspace.load_config()?)?;
    workspace.save_config(&updated)?;
    println!("{}", ui::success(&format!("{key} = {time}")));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_target() {
        assert_eq!(resolve_target("telegram").ok(), Some("telegram_bot_token"));
        assert_eq!(resolve_target("telegram_chat_id").ok(), Some("telegram_chat_id"));
        assert_eq!(resolve_target("email_smtp_server").ok(), Some("email_smtp_server"));
        assert_eq!(resolve_target("ntfy_topic").ok(), Some("ntfy_topic"));
        assert!(resolve_target("slack").is_err());
        assert!(resolve_target("enable_notification").is_err());
    }
}
