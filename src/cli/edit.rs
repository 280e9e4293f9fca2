use clap::{Parser, ValueEnum};

/// Arguments for the edit command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Edit the config file:\n    trendctl edit config\n\n\
                  Edit keywords with another editor:\n    EDITOR=vim trendctl edit keywords")]
pub struct EditArgs {
    /// Which file to open
    #[arg(value_enum)]
    pub target: EditTarget,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditTarget {
    Config,
    Keywords,
}
