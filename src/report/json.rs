//! JSON report

use std::io::Write;
use std::path::PathBuf;

use serde::Serialize;

use super::{Summary, ViolationSink};
use crate::error::Result;
use crate::rules::Violation;

#[derive(Serialize)]
struct Entry<'a> {
    #[serde(flatten)]
    violation: &'a Violation,
    /// Resource path relative to the project directory
    path: String,
}

#[derive(Serialize)]
struct Document<'a> {
    violations: Vec<Entry<'a>>,
    summary: &'a Summary,
}

/// Collects violations and writes them as one document on [`finish`]
///
/// [`finish`]: ViolationSink::finish
pub struct JsonReporter<W: Write> {
    out: W,
    project_dir: PathBuf,
    violations: Vec<Violation>,
}

impl<W: Write> JsonReporter<W> {
    pub fn new(out: W, project_dir: impl Into<PathBuf>) -> Self {
        Self {
            out,
            project_dir: project_dir.into(),
            violations: Vec::new(),
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ViolationSink for JsonReporter<W> {
    fn report(&mut self, violation: Violation) -> Result<()> {
        self.violations.push(violation);
        Ok(())
    }

    fn finish(&mut self, summary: &Summary) -> Result<()> {
        let document = Document {
            violations: self
                .violations
                .iter()
                .map(|violation| Entry {
                    violation,
                    path: violation.resource.display_path(&self.project_dir),
                })
                .collect(),
            summary,
        };
        serde_json::to_writer_pretty(&mut self.out, &document)?;
        writeln!(self.out)?;
        Ok(())
    }
}
