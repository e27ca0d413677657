use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    docmatter completions --shell bash > ~/.bash_completion.d/docmatter\n\n\
                  Generate zsh completions:\n    docmatter completions --shell zsh > ~/.zfunc/_docmatter\n\n\
                  Generate fish completions:\n    docmatter completions --shell fish > ~/.config/fish/completions/docmatter.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long, short = 's')]
    pub shell: String,
}
