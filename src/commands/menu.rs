//! Interactive menu
//!
//! Every screen reloads the files before rendering, then calls the same
//! operations as the subcommands. Errors are printed and the loop goes on;
//! Esc goes back one level.

use inquire::{Select, Text};

use super::{
    config, helpers, keywords, notify as notify_cmd, platforms, run, schedule as schedule_cmd,
};
use crate::cli::EditTarget;
use crate::commands::keywords::AddTarget;
use crate::error::{Result, TrendctlError};
use crate::input;
use crate::notify::{self, CHANNELS, WINDOW_END_KEY, WINDOW_START_KEY};
use crate::platform::PlatformEntry;
use crate::platform::registry::{self, KNOWN_PLATFORMS};
use crate::schedule::{self, PRESETS};
use crate::ui::display;
use crate::workspace::Workspace;

const BACK: &str = "Back";
const EDIT: &str = "Edit file in editor";
const HELP: &str = "↑↓ to move, ENTER to select, ESC to go back";

const MAIN_SCHEDULE: &str = "Schedule";
const MAIN_KEYWORDS: &str = "Keywords";
const MAIN_PLATFORMS: &str = "Platforms";
const MAIN_NOTIFY: &str = "Notifications";
const MAIN_RUN: &str = "Run job now";
const MAIN_QUIT: &str = "Quit";

pub fn run(workspace: &Workspace) -> Result<()> {
    loop {
        println!();
        report(overview(workspace));

        let items = vec![
            MAIN_SCHEDULE,
            MAIN_KEYWORDS,
            MAIN_PLATFORMS,
            MAIN_NOTIFY,
            MAIN_RUN,
            MAIN_QUIT,
        ];
        let choice = match select("trendctl", items) {
            Ok(Some(choice)) => choice,
            Ok(None) | Err(TrendctlError::Cancelled) => return Ok(()),
            Err(e) => return Err(e),
        };
        let result = match choice {
            MAIN_SCHEDULE => schedule_menu(workspace),
            MAIN_KEYWORDS => keywords_menu(workspace),
            MAIN_PLATFORMS => platforms_menu(workspace),
            MAIN_NOTIFY => notify_menu(workspace),
            MAIN_RUN => run::run(workspace),
            _ => return Ok(()),
        };
        report(result);
    }
}

fn overview(workspace: &Workspace) -> Result<()> {
    println!("{}", display::schedule(workspace.schedule()?.as_deref()));
    let document = workspace.load_keywords()?;
    println!(
        "Keywords: {} in {} groups",
        document.keyword_count(),
        document.groups().len()
    );
    Ok(())
}

fn schedule_menu(workspace: &Workspace) -> Result<()> {
    const DAILY: &str = "Once a day at...";
    const CUSTOM: &str = "Custom cron expression";

    loop {
        report(schedule_cmd::show(workspace));
        let mut items: Vec<&str> = PRESETS.iter().map(|p| p.label).collect();
        items.extend([DAILY, CUSTOM, BACK]);
        let Some(choice) = select("Schedule", items)? else {
            return Ok(());
        };

        let result = match choice {
            DAILY => with_input("Time (HH:MM or hour)", |time| {
                schedule::daily(&time).and_then(|expr| schedule_cmd::update(workspace, &expr))
            }),
            CUSTOM => with_input("Cron expression (minute hour day month weekday)", |expr| {
                schedule::custom(&expr).and_then(|expr| schedule_cmd::update(workspace, &expr))
            }),
            BACK => return Ok(()),
            label => match PRESETS.iter().find(|p| p.label == label) {
                Some(preset) => schedule_cmd::update(workspace, preset.expression),
                None => Ok(()),
            },
        };
        report(result);
    }
}

fn keywords_menu(workspace: &Workspace) -> Result<()> {
    const ADD: &str = "Add keywords";
    const REMOVE: &str = "Remove keywords";
    const REMOVE_GROUPS: &str = "Remove groups";
    const CLEAR: &str = "Remove all keywords";

    loop {
        report(keywords::list(workspace, false));
        let items = vec![ADD, REMOVE, REMOVE_GROUPS, CLEAR, EDIT, BACK];
        let Some(choice) = select("Keywords", items)? else {
            return Ok(());
        };
        let result = match choice {
            ADD => add_keywords(workspace),
            REMOVE => with_input("Keyword numbers (e.g. 1,3)", |list| {
                input::parse_indices(&list)
                    .and_then(|positions| keywords::remove(workspace, &positions, false))
                    .map(drop)
            }),
            REMOVE_GROUPS => remove_keyword_groups(workspace),
            CLEAR => keywords::clear(workspace, false).map(drop),
            EDIT => run::open(workspace, EditTarget::Keywords).map(drop),
            _ => return Ok(()),
        };
        report(result);
    }
}

fn add_keywords(workspace: &Workspace) -> Result<()> {
    let Some(list) = prompt(
        "Keywords (comma separated, +word = required, !word = excluded)",
        None,
    )?
    else {
        return Ok(());
    };

    let document = workspace.load_keywords()?;
    let target = if document.is_empty() {
        AddTarget::NewGroup
    } else {
        const NEW_GROUP: &str = "New group";
        let mut items = vec![NEW_GROUP.to_string()];
        items.extend(
            document
                .groups()
                .iter()
                .enumerate()
                .map(|(i, g)| format!("Group {}: {}", i + 1, g.preview(3))),
        );
        let Some(choice) = Select::new("Add to", items.clone())
            .with_help_message(HELP)
            .without_filtering()
            .prompt_skippable()?
        else {
            return Ok(());
        };
        match items.iter().position(|item| *item == choice) {
            Some(0) | None => AddTarget::NewGroup,
            Some(group) => AddTarget::Group(group),
        }
    };
    keywords::add(workspace, &list, target).map(drop)
}

fn remove_keyword_groups(workspace: &Workspace) -> Result<()> {
    print!("{}", display::keyword_groups(&workspace.load_keywords()?));
    let Some(list) = prompt("Group numbers (e.g. 1,2)", None)? else {
        return Ok(());
    };
    let groups = input::parse_indices(&list)?;
    keywords::remove_groups(workspace, &groups, false).map(drop)
}

fn platforms_menu(workspace: &Workspace) -> Result<()> {
    const TOGGLE: &str = "Enable / disable";
    const ADD: &str = "Add platform";
    const REMOVE: &str = "Remove platforms";

    loop {
        report(platforms::list(workspace, false));
        let Some(choice) = select("Platforms", vec![TOGGLE, ADD, REMOVE, BACK])? else {
            return Ok(());
        };
        let result = match choice {
            TOGGLE => with_input("Platform numbers (e.g. 1,3)", |list| {
                input::parse_indices(&list).and_then(|indices| platforms::toggle(workspace, &indices))
            }),
            ADD => add_platform(workspace),
            REMOVE => with_input("Platform numbers (e.g. 2)", |list| {
                input::parse_indices(&list)
                    .and_then(|indices| platforms::remove(workspace, &indices, false))
                    .map(drop)
            }),
            _ => return Ok(()),
        };
        report(result);
    }
}

fn add_platform(workspace: &Workspace) -> Result<()> {
    let known: Vec<&str> = KNOWN_PLATFORMS.iter().map(|(id, _)| *id).collect();
    println!("Known ids: {}", known.join(", "));
    let Some(id) = prompt("Platform id", None)? else {
        return Ok(());
    };
    let default = registry::default_name(&id);
    let name = prompt("Display name", Some(&default))?.unwrap_or(default);

    println!("Will add:");
    print!("{}", display::platform_preview(&PlatformEntry::new(&id, &name)));
    if !helpers::confirm("Add this platform?", false)? {
        println!("Cancelled");
        return Ok(());
    }
    platforms::add(workspace, &id, Some(&name)).map(drop)
}

fn notify_menu(workspace: &Workspace) -> Result<()> {
    const TOGGLE: &str = "Turn notifications on / off";
    const CHANNEL: &str = "Configure a channel";
    const EMAIL: &str = "Email details";
    const WINDOW: &str = "Push window";

    loop {
        report(notify_cmd::status(workspace, false));
        let items = vec![TOGGLE, CHANNEL, EMAIL, WINDOW, EDIT, BACK];
        let Some(choice) = select("Notifications", items)? else {
            return Ok(());
        };
        let result = match choice {
            TOGGLE => notify_cmd::toggle(workspace).map(drop),
            CHANNEL => configure_channel(workspace),
            EMAIL => notify_cmd::email(workspace),
            WINDOW => window_menu(workspace),
            EDIT => run::open(workspace, EditTarget::Config).map(drop),
            _ => return Ok(()),
        };
        report(result);
    }
}

fn configure_channel(workspace: &Workspace) -> Result<()> {
    let labels: Vec<&str> = CHANNELS.iter().map(|c| c.label).collect();
    let Some(label) = select("Channel", labels)? else {
        return Ok(());
    };
    let Some(channel) = CHANNELS.iter().find(|c| c.label == label) else {
        return Ok(());
    };

    let keys = std::iter::once(&channel.key).chain(channel.extra_keys.iter());
    for key in keys {
        let current = config::get(workspace, key).unwrap_or_default();
        let shown = notify::display_value(key, &current);
        let message = format!("{key} [{shown}] (Enter keeps, '{}' empties)", notify::CLEAR_WORD);
        if let Some(value) = prompt(&message, None)? {
            notify_cmd::set(workspace, key, &value)?;
        }
    }
    Ok(())
}

fn window_menu(workspace: &Workspace) -> Result<()> {
    const TOGGLE: &str = "Turn window on / off";
    const START: &str = "Set start time";
    const END: &str = "Set end time";

    loop {
        report(notify_cmd::show_window(workspace, false));
        let Some(choice) = select("Push window", vec![TOGGLE, START, END, BACK])? else {
            return Ok(());
        };
        let result = match choice {
            TOGGLE => notify_cmd::toggle_window(workspace).map(drop),
            START => with_input("Start (HH:MM)", |time| {
                notify_cmd::set_window_time(workspace, WINDOW_START_KEY, &time)
            }),
            END => with_input("End (HH:MM)", |time| {
                notify_cmd::set_window_time(workspace, WINDOW_END_KEY, &time)
            }),
            _ => return Ok(()),
        };
        report(result);
    }
}

/// Single choice; `None` on Esc.
fn select<'a>(message: &str, items: Vec<&'a str>) -> Result<Option<&'a str>> {
    Ok(Select::new(message, items)
        .with_page_size(12)
        .without_filtering()
        .with_help_message(HELP)
        .prompt_skippable()?)
}

/// Free text; `None` on Esc or empty input.
fn prompt(message: &str, default: Option<&str>) -> Result<Option<String>> {
    let mut text = Text::new(message);
    if let Some(default) = default {
        text = text.with_default(default);
    }
    let answer = text.prompt_skippable()?;
    Ok(answer
        .map(|a| a.trim().to_string())
        .filter(|a| !a.is_empty()))
}

/// Prompt for text and hand a non-empty answer to `action`.
fn with_input(message: &str, action: impl FnOnce(String) -> Result<()>) -> Result<()> {
    match prompt(message, None)? {
        Some(answer) => action(answer),
        None => Ok(()),
    }
}

/// Print an error and keep going; cancellation is silent.
fn report(result: Result<()>) {
    match result {
        Ok(()) | Err(TrendctlError::Cancelled) => {}
        Err(e) => eprintln!("Error: {e}"),
    }
}
