//! Check command implementation

use std::path::PathBuf;

use crate::audit::run_audit;
use crate::cli::{CheckArgs, OutputFormat};
use crate::config::{Overrides, Settings};
use crate::error::{AuditError, Result};
use crate::report::{ConsoleReporter, JsonReporter};

/// Run check command
pub fn run(project: Option<PathBuf>, config: Option<PathBuf>, args: CheckArgs) -> Result<()> {
    let overrides = Overrides {
        locales: args.locales,
        exclude_key_prefixes: args.exclude_key_prefixes,
        source_directories: args.source_dirs,
        rules: args.rule,
    };
    let settings = Settings::load(project, config, &overrides)?;

    let out = std::io::stdout().lock();
    let summary = match args.format {
        OutputFormat::Text => run_audit(
            &settings,
            &mut ConsoleReporter::new(out, settings.project_dir.clone()),
        )?,
        OutputFormat::Json => run_audit(
            &settings,
            &mut JsonReporter::new(out, settings.project_dir.clone()),
        )?,
    };

    let count = summary.map_or(0, |s| s.total());
    if args.fail_on_violations && count > 0 {
        return Err(AuditError::ViolationsFound { count });
    }
    Ok(())
}
