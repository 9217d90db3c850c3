//! Violation reporting
//!
//! The audit hands violations one by one to a [`ViolationSink`] and closes
//! it with a [`Summary`]. Reporters decide how, and when, to render them:
//! - [`ConsoleReporter`]: human readable lines plus a summary
//! - [`JsonReporter`]: a single JSON document
//!
//! `Vec<Violation>` is a sink too, for tests and embedding.

pub mod console;
pub mod json;

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::Result;
use crate::locale::Locale;
use crate::rules::{Rule, Violation};

pub use self::console::ConsoleReporter;
pub use self::json::JsonReporter;

/// Receiver of the violations of one run
pub trait ViolationSink {
    fn report(&mut self, violation: Violation) -> Result<()>;

    /// Called once after the last violation
    fn finish(&mut self, _summary: &Summary) -> Result<()> {
        Ok(())
    }
}

impl ViolationSink for Vec<Violation> {
    fn report(&mut self, violation: Violation) -> Result<()> {
        self.push(violation);
        Ok(())
    }
}

/// Figures about one run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub files_scanned: usize,
    pub files_skipped: usize,
    pub bundles: usize,
    pub locales: Vec<Locale>,
    pub rules: Vec<Rule>,
    /// Violation count per rule that reported any
    pub violations: BTreeMap<Rule, usize>,
}

impl Summary {
    pub fn total(&self) -> usize {
        self.violations.values().sum()
    }

    pub(crate) fn count(&mut self, rule: Rule) {
        *self.violations.entry(rule).or_default() += 1;
    }
}
