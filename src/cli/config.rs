use clap::{Parser, Subcommand};

/// Arguments for the config command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Read a value:\n    trendctl config get push_window.time_range.start\n\n\
                  Write a quoted value:\n    trendctl config set feishu_url https://open.feishu.cn/hook/x\n\n\
                  Write a boolean:\n    trendctl config set enable_notification false --bool")]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigSubcommand {
    /// Print the value of a key
    Get {
        /// Dotted key path; a single key matches anywhere
        path: String,
    },

    /// Replace the value of an existing key
    Set {
        /// Dotted key path; a single key matches anywhere
        path: String,

        value: String,

        /// Write the value as a bare true/false
        #[arg(long)]
        bool: bool,
    },
}
