use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    l10n-audit completions bash > ~/.bash_completion.d/l10n-audit\n\n\
                  Generate zsh completions:\n    l10n-audit completions zsh > ~/.zfunc/_l10n-audit\n\n\
                  Generate fish completions:\n    l10n-audit completions fish > ~/.config/fish/completions/l10n-audit.fish\n\n\
                  Generate PowerShell completions:\n    l10n-audit completions powershell")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
