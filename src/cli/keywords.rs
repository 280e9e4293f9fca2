use clap::{Parser, Subcommand};

/// Arguments for the keywords command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List keywords by group:\n    trendctl keywords\n\n\
                  Add a new group:\n    trendctl keywords add \"AI,芯片\"\n\n\
                  Add to group 2:\n    trendctl keywords add 手机+华为 --group 2\n\n\
                  Remove keywords 3 and 5:\n    trendctl keywords remove 3,5 --yes\n\n\
                  Remove everything (monitor all news):\n    trendctl keywords clear --yes")]
pub struct KeywordsArgs {
    #[command(subcommand)]
    pub command: Option<KeywordsSubcommand>,
}

/// Keywords subcommands
#[derive(Subcommand, Debug)]
pub enum KeywordsSubcommand {
    /// List keywords grouped, with global numbers
    List {
        /// Print groups as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add keywords to a group
    Add {
        /// Keywords, comma separated or as separate values
        #[arg(required = true, num_args = 1..)]
        words: Vec<String>,

        /// 1-based group number to add to
        #[arg(long, short = 'g', conflicts_with = "new_group")]
        group: Option<usize>,

        /// Start a new group (the default)
        #[arg(long)]
        new_group: bool,
    },

    /// Remove keywords by global number
    Remove {
        #[arg(required = true, num_args = 1..)]
        positions: Vec<String>,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Remove whole groups by group number
    RemoveGroup {
        #[arg(required = true, num_args = 1..)]
        groups: Vec<String>,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Remove all keywords
    Clear {
        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}
