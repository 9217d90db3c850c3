//! Version command implementation

use std::io::{self, Write};

use crate::bundle::FILE_EXTENSION;
use crate::config::CONFIG_FILE_NAME;
use crate::config::sources::DEFAULT_SOURCE_DIRECTORIES;
use crate::error::Result;
use crate::rules::Rule;

/// Run version command
pub fn run() -> Result<()> {
    render(&mut io::stdout().lock())?;
    Ok(())
}

/// Version plus the fixed inputs an audit works with
fn render(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "l10n-audit {}", env!("CARGO_PKG_VERSION"))?;
    writeln!(out)?;
    writeln!(out, "Build info:")?;
    let rules: Vec<&str> = Rule::ALL.iter().map(|rule| rule.key()).collect();
    writeln!(out, "  Rules: {}", rules.join(", "))?;
    writeln!(out, "  Bundle files: *.{FILE_EXTENSION}")?;
    writeln!(out, "  Configuration file: {CONFIG_FILE_NAME}")?;
    writeln!(
        out,
        "  Default source directories: {}",
        DEFAULT_SOURCE_DIRECTORIES.join(", ")
    )?;
    writeln!(out, "  Log filter variable: {}", crate::LOG_ENV)
}
