//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - check: Check command arguments
//! - rules: Rules command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod check;
pub mod completions;
pub mod rules;

pub use check::{CheckArgs, OutputFormat};
pub use completions::CompletionsArgs;
pub use rules::RulesArgs;

/// l10n-audit - localization bundle consistency checker
///
/// Check Java-style properties bundles for missing and unused translations.
#[derive(Parser, Debug)]
#[command(
    name = "l10n-audit",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Consistency audit for localization bundles",
    long_about = "l10n-audit groups the .properties files of a project into bundles and \
                  reports bundles, keys and values missing for a locale, and bundles \
                  nobody checks.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  l10n-audit check                          \x1b[90m# Audit the current directory\x1b[0m\n   \
                  l10n-audit check --locales null,fr,de     \x1b[90m# Check these locales only\x1b[0m\n   \
                  l10n-audit -p ../app check --format json  \x1b[90m# JSON report for another project\x1b[0m\n   \
                  l10n-audit rules                          \x1b[90m# List the rules\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Project directory (defaults to current directory)
    #[arg(long, short = 'p', global = true, env = "L10N_AUDIT_PROJECT")]
    pub project: Option<PathBuf>,

    /// Configuration file (defaults to l10n-audit.yaml in the project directory)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Audit the localization bundles of the project
    Check(CheckArgs),

    /// List the consistency rules
    Rules(RulesArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
