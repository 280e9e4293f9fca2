//! Platforms command implementation

use tracing::debug;

use super::helpers;
use crate::cli::{PlatformsArgs, PlatformsSubcommand};
use crate::error::{self, Result};
use crate::platform::registry;
use crate::platform::{PlatformEntry, PlatformSection};
use crate::ui::{self, display};
use crate::workspace::Workspace;

pub fn run(workspace: &Workspace, args: PlatformsArgs) -> Result<()> {
    match args
        .command
        .unwrap_or(PlatformsSubcommand::List { json: false })
    {
        PlatformsSubcommand::List { json } => list(workspace, json),
        PlatformsSubcommand::Add { id, name } => add(workspace, &id, name.as_deref()).map(drop),
        PlatformsSubcommand::Remove { indices, yes } => {
            remove(workspace, &helpers::indices(&indices)?, yes).map(drop)
        }
        PlatformsSubcommand::Toggle { indices } => {
            toggle(workspace, &helpers::indices(&indices)?)
        }
    }
}

pub fn list(workspace: &Workspace, json: bool) -> Result<()> {
    let (_, section) = workspace.load_platforms()?;
    if json {
        return helpers::print_json(&section.entries);
    }
    print!("{}", display::platforms(&section));
    Ok(())
}

/// Append an enabled platform; a missing name comes from the catalog.
pub fn add(workspace: &Workspace, id: &str, name: Option<&str>) -> Result<PlatformEntry> {
    let id = id.trim();
    if id.is_empty() {
        return Err(error::input::invalid("platform id is empty"));
    }
    let name = name
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map_or_else(|| registry::default_name(id), str::to_string);

    let (buffer, mut section) = workspace.load_platforms()?;
    if section.contains_id(id) {
        return Err(error::input::duplicate_platform(id));
    }
    let entry = PlatformEntry::new(id, name);
    section.append(entry.clone());
    workspace.save_platforms(section, &buffer)?;

    println!("{}", ui::success(&format!("Added {} ({})", entry.name, entry.id)));
    Ok(entry)
}

/// Remove platforms by 1-based number after confirmation.
///
/// Returns the removed entries; empty when the operator declined.
pub fn remove(
    workspace: &Workspace,
    indices: &[usize],
    assume_yes: bool,
) -> Result<Vec<PlatformEntry>> {
    let (buffer, mut section) = workspace.load_platforms()?;
    let zero_based = in_range(&section, indices)?;

    println!("Platforms to remove:");
    for i in &zero_based {
        println!("{}", display::platform_line(i + 1, &section.entries[*i]));
    }
    if !helpers::confirm("Remove these platforms?", assume_yes)? {
        println!("Cancelled");
        return Ok(Vec::new());
    }

    let removed = section.remove_indices(&zero_based);
    workspace.save_platforms(section, &buffer)?;
    println!(
        "{}",
        ui::success(&format!("Removed {} platform(s)", removed.len()))
    );
    Ok(removed)
}

/// Flip `enabled` on platforms by 1-based number.
pub fn toggle(workspace: &Workspace, indices: &[usize]) -> Result<()> {
    let (buffer, mut section) = workspace.load_platforms()?;
    let zero_based = in_range(&section, indices)?;

    for i in zero_based {
        if let Some(enabled) = section.toggle(i) {
            let entry = &section.entries[i];
            let state = if enabled { "enabled" } else { "disabled" };
            println!("{}", ui::success(&format!("{} ({}) {state}", entry.name, entry.id)));
        }
    }
    workspace.save_platforms(section, &buffer)
}

/// Keep the 1-based numbers that name an entry, as 0-based indices.
fn in_range(section: &PlatformSection, indices: &[usize]) -> Result<Vec<usize>> {
    let total = section.entries.len();
    let (valid, ignored): (Vec<usize>, Vec<usize>) =
        indices.iter().copied().partition(|i| (1..=total).contains(i));
    if !ignored.is_empty() {
        debug!(?ignored, total, "ignoring out of range platform numbers");
    }
    if valid.is_empty() {
        return Err(error::input::invalid(format!(
            "no platform numbers in range 1-{total}"
        )));
    }
    Ok(valid.into_iter().map(|i| i - 1).collect())
}
