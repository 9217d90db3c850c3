use clap::Parser;

/// Arguments for the rules command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List the rules:\n    l10n-audit rules\n\n\
                  Show the rules a configuration enables:\n    l10n-audit -c ci/l10n-audit.yaml rules --active")]
pub struct RulesArgs {
    /// Only list the rules enabled by the configuration
    #[arg(long)]
    pub active: bool,
}
