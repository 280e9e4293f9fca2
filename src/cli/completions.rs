use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    trendctl completions bash > ~/.bash_completion.d/trendctl\n\n\
                  Generate zsh completions:\n    trendctl completions zsh > ~/.zfunc/_trendctl\n\n\
                  Generate fish completions:\n    trendctl completions fish > ~/.config/fish/completions/trendctl.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
