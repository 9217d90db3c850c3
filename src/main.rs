//! l10n-audit - localization bundle consistency checker
//!
//! Groups the Java-style `.properties` files of a project into bundles
//! (`labels.properties`, `labels_fr.properties`, ...) and reports what is
//! missing or unused across locales.

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod audit;
mod bundle;
mod cli;
mod commands;
mod config;
mod error;
mod locale;
mod report;
mod rules;

use cli::{Cli, Commands};

/// Environment variable overriding the log filter
const LOG_ENV: &str = "L10N_AUDIT_LOG";

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Check(args) => commands::check::run(cli.project, cli.config, args),
        Commands::Rules(args) => commands::rules::run(cli.project, cli.config, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
