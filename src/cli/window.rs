use clap::{Parser, Subcommand};

/// Arguments for the window command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Show the push window:\n    trendctl window\n\n\
                  Only push between 08:00 and 22:00:\n    trendctl window start 08:00\n    trendctl window end 22:00\n    trendctl window toggle")]
pub struct WindowArgs {
    #[command(subcommand)]
    pub command: Option<WindowSubcommand>,
}

/// Push window subcommands
#[derive(Subcommand, Debug)]
pub enum WindowSubcommand {
    /// Show whether the window is on and its time range
    Show {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Turn the window on or off
    Toggle,

    /// Set the start time (HH:MM)
    Start { time: String },

    /// Set the end time (HH:MM)
    End { time: String },
}
