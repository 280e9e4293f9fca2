//! Schedule command implementation

use console::Style;

use crate::cli::{ScheduleArgs, ScheduleSubcommand};
use crate::error::Result;
use crate::schedule::{self, PRESETS};
use crate::ui::{self, display};
use crate::workspace::Workspace;

pub fn run(workspace: &Workspace, args: ScheduleArgs) -> Result<()> {
    match args.command.unwrap_or(ScheduleSubcommand::Show) {
        ScheduleSubcommand::Show => show(workspace),
        ScheduleSubcommand::Presets => {
            presets();
            Ok(())
        }
        ScheduleSubcommand::Set { expression } => {
            let expression = match schedule::preset(expression.trim()) {
                Some(preset) => preset.expression.to_string(),
                None => schedule::custom(&expression)?,
            };
            update(workspace, &expression)
        }
        ScheduleSubcommand::Daily { time } => update(workspace, &schedule::daily(&time)?),
    }
}

pub fn show(workspace: &Workspace) -> Result<()> {
    let current = workspace.schedule()?;
    println!("{}", display::schedule(current.as_deref()));
    Ok(())
}

fn presets() {
    for preset in PRESETS {
        println!(
            "  {:<18} {:<14} {}",
            Style::new().cyan().apply_to(preset.name),
            preset.expression,
            Style::new().dim().apply_to(preset.label)
        );
    }
}

/// Write a validated expression to the crontab.
pub fn update(workspace: &Workspace, expression: &str) -> Result<()> {
    workspace.set_schedule(expression)?;
    println!("{}", ui::success(&format!("Schedule set to {expression}")));
    println!(
        "{}",
        ui::warning("Restart the container for the new schedule to take effect")
    );
    Ok(())
}
