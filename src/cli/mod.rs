//! CLI definitions using clap derive API
//!
//! One submodule per command's argument types. Running without a
//! subcommand opens the interactive menu.

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod config;
pub mod edit;
pub mod keywords;
pub mod notify;
pub mod platforms;
pub mod schedule;
pub mod window;

pub use completions::CompletionsArgs;
pub use config::{ConfigArgs, ConfigSubcommand};
pub use edit::{EditArgs, EditTarget};
pub use keywords::{KeywordsArgs, KeywordsSubcommand};
pub use notify::{NotifyArgs, NotifySubcommand};
pub use platforms::{PlatformsArgs, PlatformsSubcommand};
pub use schedule::{ScheduleArgs, ScheduleSubcommand};
pub use window::{WindowArgs, WindowSubcommand};

/// trendctl - configuration manager for the trend scraper
#[derive(Parser, Debug)]
#[command(
    name = "trendctl",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Edit the trend scraper's platforms, keywords, notifications and schedule",
    long_about = "trendctl edits the scraper's config.yaml, keyword file and crontab in place. \
                  Comments and layout outside the edited lines are preserved. \
                  Run without a subcommand for the interactive menu.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  trendctl                              \x1b[90m# Interactive menu\x1b[0m\n   \
                  trendctl platforms                    \x1b[90m# List platforms\x1b[0m\n   \
                  trendctl platforms toggle 2           \x1b[90m# Enable/disable platform 2\x1b[0m\n   \
                  trendctl keywords add \"AI,芯片\"        \x1b[90m# Add a keyword group\x1b[0m\n   \
                  trendctl notify set ntfy my-topic     \x1b[90m# Configure a channel\x1b[0m\n   \
                  trendctl schedule set hourly          \x1b[90m# Change the crontab\x1b[0m\n   \
                  trendctl run                          \x1b[90m# Run the scraper now\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Scraper config file
    #[arg(long, global = true, env = "TRENDCTL_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Keyword groups file
    #[arg(long, global = true, env = "TRENDCTL_KEYWORDS", value_name = "FILE")]
    pub keywords: Option<PathBuf>,

    /// Crontab file
    #[arg(long, global = true, env = "TRENDCTL_CRONTAB", value_name = "FILE")]
    pub crontab: Option<PathBuf>,

    /// trendctl settings file
    #[arg(long, global = true, env = "TRENDCTL_SETTINGS", value_name = "FILE")]
    pub settings: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List and edit the platforms section
    Platforms(PlatformsArgs),

    /// List and edit keyword groups
    Keywords(KeywordsArgs),

    /// Read or write any scalar key in the config file
    Config(ConfigArgs),

    /// Notification switch and channels
    Notify(NotifyArgs),

    /// Push time window
    Window(WindowArgs),

    /// Crontab schedule
    Schedule(ScheduleArgs),

    /// Run the scraper once in the foreground
    Run,

    /// Open a file in the text editor
    Edit(EditArgs),

    /// Interactive menu
    Menu,

    /// Generate shell completions
    Completions(CompletionsArgs),

    /// Show version information
    #[command(hide = true)]
    Version,
}
