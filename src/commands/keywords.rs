//! Keywords command implementation

use super::helpers;
use crate::cli::{KeywordsArgs, KeywordsSubcommand};
use crate::error::{self, Result};
use crate::input;
use crate::ui::{self, display};
use crate::workspace::Workspace;

/// Where new keywords go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddTarget {
    /// Existing group, 1-based
    Group(usize),
    NewGroup,
}

pub fn run(workspace: &Workspace, args: KeywordsArgs) -> Result<()> {
    match args
        .command
        .unwrap_or(KeywordsSubcommand::List { json: false })
    {
        KeywordsSubcommand::List { json } => list(workspace, json),
        KeywordsSubcommand::Add { words, group, .. } => {
            let target = group.map_or(AddTarget::NewGroup, AddTarget::Group);
            add(workspace, &input::join_args(&words), target).map(drop)
        }
        KeywordsSubcommand::Remove { positions, yes } => {
            remove(workspace, &helpers::indices(&positions)?, yes).map(drop)
        }
        KeywordsSubcommand::RemoveGroup { groups, yes } => {
            remove_groups(workspace, &helpers::indices(&groups)?, yes).map(drop)
        }
        KeywordsSubcommand::Clear { yes } => clear(workspace, yes).map(drop),
    }
}

pub fn list(workspace: &Workspace, json: bool) -> Result<()> {
    let document = workspace.load_keywords()?;
    if json {
        return helpers::print_json(&document);
    }
    print!("{}", display::keywords(&document));
    Ok(())
}

/// Add a comma separated list of keywords. Returns how many were added.
///
/// With no groups in the file a new group is always created.
pub fn add(workspace: &Workspace, list: &str, target: AddTarget) -> Result<usize> {
    let words = input::split_list(list);
    if words.is_empty() {
        return Err(error::input::invalid("no keywords given"));
    }

    let mut document = workspace.load_keywords()?;
    let target = if document.is_empty() {
        AddTarget::NewGroup
    } else {
        target
    };

    let added = match target {
        AddTarget::NewGroup => {
            document.push_group(&words);
            words.len()
        }
        AddTarget::Group(number) => {
            let total = document.groups().len();
            number
                .checked_sub(1)
                .and_then(|g| document.add_to_group(g, &words))
                .ok_or_else(|| {
                    error::input::invalid(format!("group {number} does not exist (1-{total})"))
                })?
        }
    };

    if added == 0 {
        println!("{}", ui::warning("All keywords are already in the group"));
        return Ok(0);
    }
    workspace.save_keywords(&document)?;
    println!("{}", ui::success(&format!("Added {added} keyword(s)")));
    Ok(added)
}

/// Remove keywords by global 1-based position after confirmation.
pub fn remove(workspace: &Workspace, positions: &[usize], assume_yes: bool) -> Result<usize> {
    let mut document = workspace.load_keywords()?;
    let targets: Vec<String> = document
        .numbered()
        .filter(|k| positions.contains(&k.position))
        .map(|k| format!("{:>4}. {}", k.position, k.text))
        .collect();
    if targets.is_empty() {
        return Err(error::input::invalid(format!(
            "no keyword numbers in range 1-{}",
            document.keyword_count()
        )));
    }

    println!("Keywords to remove:");
    for line in &targets {
        println!("{line}");
    }
    if !helpers::confirm("Remove these keywords?", assume_yes)? {
        println!("Cancelled");
        return Ok(0);
    }

    let removed = document.remove_positions(positions);
    workspace.save_keywords(&document)?;
    println!("{}", ui::success(&format!("Removed {removed} keyword(s)")));
    Ok(removed)
}

/// Remove whole groups by 1-based group number after confirmation.
pub fn remove_groups(workspace: &Workspace, groups: &[usize], assume_yes: bool) -> Result<usize> {
    let mut document = workspace.load_keywords()?;
    let total = document.groups().len();
    let zero_based: Vec<usize> = groups
        .iter()
        .filter(|g| (1..=total).contains(*g))
        .map(|g| g - 1)
        .collect();
    if zero_based.is_empty() {
        return Err(error::input::invalid(format!(
            "no group numbers in range 1-{total}"
        )));
    }

    println!("Groups to remove:");
    for g in &zero_based {
        println!("{:>2}. {}", g + 1, document.groups()[*g].preview(3));
    }
    if !helpers::confirm("Remove these groups?", assume_yes)? {
        println!("Cancelled");
        return Ok(0);
    }

    let removed = document.remove_groups(&zero_based);
    workspace.save_keywords(&document)?;
    println!("{}", ui::success(&format!("Removed {removed} group(s)")));
    Ok(removed)
}

/// Empty the keyword file after confirmation. Returns whether it was cleared.
pub fn clear(workspace: &Workspace, assume_yes: bool) -> Result<bool> {
    let mut document = workspace.load_keywords()?;
    if document.is_empty() {
        println!("No keywords configured");
        return Ok(false);
    }
    let prompt = format!(
        "Remove all {} keywords? All news will be monitored",
        document.keyword_count()
    );
    if !helpers::confirm(&prompt, assume_yes)? {
        println!("Cancelled");
        return Ok(false);
    }

    document.clear();
    workspace.save_keywords(&document)?;
    println!("{}", ui::success("Cleared all keywords"));
    Ok(true)
}
