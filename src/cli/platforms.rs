use clap::{Parser, Subcommand};

/// Arguments for the platforms command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List platforms:\n    trendctl platforms\n\n\
                  Add a platform (name looked up for known ids):\n    trendctl platforms add zhihu\n\n\
                  Add with a custom name:\n    trendctl platforms add hackernews \"Hacker News\"\n\n\
                  Disable the first and third platform:\n    trendctl platforms toggle 1,3\n\n\
                  Remove without confirmation:\n    trendctl platforms remove 2 --yes")]
pub struct PlatformsArgs {
    #[command(subcommand)]
    pub command: Option<PlatformsSubcommand>,
}

/// Platforms subcommands
#[derive(Subcommand, Debug)]
pub enum PlatformsSubcommand {
    /// List platforms with their numbers
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add an enabled platform
    Add {
        /// Platform id, e.g. weibo
        id: String,

        /// Display name (defaults to the known name, else the id)
        name: Option<String>,
    },

    /// Remove platforms by number
    Remove {
        /// 1-based numbers, comma separated or as separate values
        #[arg(required = true, num_args = 1..)]
        indices: Vec<String>,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Enable or disable platforms by number
    Toggle {
        /// 1-based numbers, comma separated or as separate values
        #[arg(required = true, num_args = 1..)]
        indices: Vec<String>,
    },
}
