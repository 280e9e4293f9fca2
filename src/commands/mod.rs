//! Command implementations for the trendctl CLI
//!
//! Each module exposes a `run` entry point for its subcommand plus the
//! operations the interactive menu reuses.

pub mod completions;
pub mod config;
pub mod helpers;
pub mod keywords;
pub mod menu;
pub mod notify;
pub mod platforms;
pub mod run;
pub mod schedule;
pub mod version;

use crate::cli::{Cli, Commands};
use crate::error::Result;
use crate::settings::Settings;
use crate::workspace::Workspace;

/// Dispatch a parsed command line.
pub fn dispatch(cli: Cli) -> Result<()> {
    match &cli.command {
        Some(Commands::Completions(args)) => return completions::run(args),
        Some(Commands::Version) => return version::run(),
        _ => {}
    }

    let settings = Settings::load(cli.settings.as_deref())?.with_overrides(
        cli.config,
        cli.keywords,
        cli.crontab,
    );
    let workspace = Workspace::new(settings);

    match cli.command {
        None | Some(Commands::Menu) => menu::run(&workspace),
        Some(Commands::Platforms(args)) => platforms::run(&workspace, args),
        Some(Commands::Keywords(args)) => keywords::run(&workspace, args),
        Some(Commands::Config(args)) => config::run(&workspace, args),
        Some(Commands::Notify(args)) => notify::run(&workspace, args),
        Some(Commands::Window(args)) => notify::run_window(&workspace, args),
        Some(Commands::Schedule(args)) => schedule::run(&workspace, args),
        Some(Commands::Run) => run::run(&workspace),
        Some(Commands::Edit(args)) => run::edit(&workspace, &args),
        Some(Commands::Completions(_) | Commands::Version) => Ok(()),
    }
}
