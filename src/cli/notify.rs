use clap::{Parser, Subcommand};

/// Arguments for the notify command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Show channel status:\n    trendctl notify\n\n\
                  Turn all notifications on or off:\n    trendctl notify toggle\n\n\
                  Configure a channel:\n    trendctl notify set dingtalk https://oapi.dingtalk.com/robot/send?access_token=x\n\n\
                  Configure an email detail:\n    trendctl notify set email_smtp_server smtp.example.com\n\n\
                  Clear a channel:\n    trendctl notify set feishu clear")]
pub struct NotifyArgs {
    #[command(subcommand)]
    pub command: Option<NotifySubcommand>,
}

/// Notify subcommands
#[derive(Subcommand, Debug)]
pub enum NotifySubcommand {
    /// Show the master switch and which channels are configured
    Status {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Flip the master switch
    Toggle,

    /// Show email details (password masked)
    Email,

    /// Set a channel (feishu, dingtalk, wework, telegram, email, ntfy) or one of its keys
    Set {
        /// Channel name or key, e.g. telegram or telegram_chat_id
        target: String,

        /// New value, or `clear` to empty it
        value: String,
    },
}
