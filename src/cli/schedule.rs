use clap::{Parser, Subcommand};

/// Arguments for the schedule command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Show the schedule:\n    trendctl schedule\n\n\
                  List presets:\n    trendctl schedule presets\n\n\
                  Use a preset:\n    trendctl schedule set hourly\n\n\
                  Use a cron expression:\n    trendctl schedule set \"15 */3 * * *\"\n\n\
                  Run daily at 08:30:\n    trendctl schedule daily 08:30")]
pub struct ScheduleArgs {
    #[command(subcommand)]
    pub command: Option<ScheduleSubcommand>,
}

/// Schedule subcommands
#[derive(Subcommand, Debug)]
pub enum ScheduleSubcommand {
    /// Show the current cron expression
    Show,

    /// List the preset names
    Presets,

    /// Set a preset name or a cron expression
    Set {
        /// Preset name (see `presets`) or a five-field cron expression
        expression: String,
    },

    /// Run once a day at HH:MM (or a bare hour)
    Daily { time: String },
}
