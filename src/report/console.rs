//! Human readable report

use std::io::Write;
use std::path::PathBuf;

use console::Style;

use super::{Summary, ViolationSink};
use crate::error::{AuditError, Result};
use crate::rules::{Severity, Violation};

/// Writes one line per violation as it arrives, then a summary
pub struct ConsoleReporter<W: Write> {
    out: W,
    project_dir: PathBuf,
}

impl<W: Write> ConsoleReporter<W> {
    /// Paths are shown relative to `project_dir`
    pub fn new(out: W, project_dir: impl Into<PathBuf>) -> Self {
        Self {
            out,
            project_dir: project_dir.into(),
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

fn severity_style(severity: Severity) -> Style {
    match severity {
        Severity::Critical => Style::new().red().bold(),
        Severity::Major => Style::new().yellow().bold(),
        Severity::Minor => Style::new().cyan(),
    }
}

fn write_failed(e: std::io::Error) -> AuditError {
    AuditError::ReportWriteFailed {
        reason: e.to_string(),
    }
}

impl<W: Write> ViolationSink for ConsoleReporter<W> {
    fn report(&mut self, violation: Violation) -> Result<()> {
        writeln!(
            self.out,
            "{:<8} {:<13} {}: {}",
            severity_style(violation.severity).apply_to(violation.severity),
            violation.rule,
            Style::new()
                .bold()
                .apply_to(violation.resource.display_path(&self.project_dir)),
            violation.message
        )
        .map_err(write_failed)
    }

    fn finish(&mut self, summary: &Summary) -> Result<()> {
        let locales: Vec<String> = summary.locales.iter().map(ToString::to_string).collect();
        let label = Style::new().bold();
        let out = &mut self.out;

        writeln!(out).map_err(write_failed)?;
        writeln!(
            out,
            "{} {} scanned, {} skipped",
            label.apply_to("Files:"),
            summary.files_scanned,
            summary.files_skipped
        )
        .map_err(write_failed)?;
        writeln!(out, "{} {}", label.apply_to("Bundles:"), summary.bundles)
            .map_err(write_failed)?;
        writeln!(out, "{} [{}]", label.apply_to("Locales:"), locales.join(", "))
            .map_err(write_failed)?;

        if summary.total() == 0 {
            writeln!(
                out,
                "{}",
                Style::new().green().bold().apply_to("No violations found")
            )
            .map_err(write_failed)?;
        } else {
            for (rule, count) in &summary.violations {
                writeln!(out, "  {rule}: {count}").map_err(write_failed)?;
            }
            writeln!(
                out,
                "{} {}",
                label.apply_to("Violations:"),
                summary.total()
            )
            .map_err(write_failed)?;
        }
        out.flush().map_err(write_failed)
    }
}
