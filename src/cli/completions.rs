use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    bundlecheck completions bash > ~/.bash_completion.d/bundlecheck\n\n\
                  Generate zsh completions:\n    bundlecheck completions zsh > ~/.zfunc/_bundlecheck\n\n\
                  Generate fish completions:\n    bundlecheck completions fish > ~/.config/fish/completions/bundlecheck.fish\n\n\
                  Generate PowerShell completions:\n    bundlecheck completions powershell")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
