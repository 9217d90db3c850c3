use clap::{Parser, ValueEnum};

use crate::rules::Rule;

/// Report format of the check command
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One line per violation and a summary
    #[default]
    Text,
    /// A single JSON document
    Json,
}

/// Arguments for the check command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Audit the current directory:\n    l10n-audit check\n\n\
                  Check the unlocalized files and French only:\n    l10n-audit check --locales null,fr\n\n\
                  Ignore internal keys:\n    l10n-audit check --exclude-key-prefixes internal.,debug.\n\n\
                  Run a single rule and fail the build on findings:\n    l10n-audit check --rule MissingKey --fail-on-violations")]
pub struct CheckArgs {
    /// Locales to check, comma separated ("null" is the unlocalized file)
    #[arg(long, value_name = "CSV")]
    pub locales: Option<String>,

    /// Ignore keys starting with one of these prefixes, comma separated
    #[arg(long, value_name = "CSV")]
    pub exclude_key_prefixes: Option<String>,

    /// Directories to scan relative to the project, comma separated
    #[arg(long, value_name = "CSV")]
    pub source_dirs: Option<String>,

    /// Run only this rule (repeatable)
    #[arg(long, value_name = "KEY", value_parser = parse_rule)]
    pub rule: Vec<Rule>,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Exit with an error when any violation is reported
    #[arg(long)]
    pub fail_on_violations: bool,
}

fn parse_rule(value: &str) -> Result<Rule, String> {
    Rule::from_key(value).ok_or_else(|| {
        let keys: Vec<&str> = Rule::ALL.iter().map(|rule| rule.key()).collect();
        format!("unknown rule '{value}' (expected one of: {})", keys.join(", "))
    })
}
