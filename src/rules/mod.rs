//! Consistency rules
//!
//! The catalogue is closed: [`Rule`] lists every check and dispatches to the
//! module implementing it. Each check is a pure function over the finished
//! [`BundleProject`] and the effective locale set; checks never share state
//! and can run in any order.
//!
//! Rules declare the file content they need as [`Capability`] values. The
//! union over the active rules tells the bundle builder whether to parse
//! keys and values at all.

pub mod missing_bundle;
pub mod missing_key;
pub mod missing_value;
pub mod unused_bundle;

use std::collections::BTreeSet;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::bundle::{Bundle, BundleProject};
use crate::locale::Locale;

/// Content a rule needs from the bundle files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    /// Key presence
    NeedsKeys,
    /// Value content
    NeedsValues,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capability::NeedsKeys => f.write_str("keys"),
            Capability::NeedsValues => f.write_str("values"),
        }
    }
}

/// Set of capabilities requested from the builder
pub type Capabilities = BTreeSet<Capability>;

/// Severity reported with each violation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Major,
    Minor,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Critical => f.pad("CRITICAL"),
            Severity::Major => f.pad("MAJOR"),
            Severity::Minor => f.pad("MINOR"),
        }
    }
}

/// The consistency checks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Rule {
    MissingBundle,
    MissingKey,
    MissingValue,
    UnusedBundle,
}

impl Rule {
    /// Every rule, in reporting order
    pub const ALL: [Rule; 4] = [
        Rule::MissingBundle,
        Rule::MissingKey,
        Rule::MissingValue,
        Rule::UnusedBundle,
    ];

    /// Stable identifier used in configuration and reports
    pub fn key(self) -> &'static str {
        match self {
            Rule::MissingBundle => "MissingBundle",
            Rule::MissingKey => "MissingKey",
            Rule::MissingValue => "MissingValue",
            Rule::UnusedBundle => "UnusedBundle",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Rule::MissingBundle => "Missing L10n bundle",
            Rule::MissingKey => "Missing L10n key",
            Rule::MissingValue => "Missing L10n value",
            Rule::UnusedBundle => "Unused L10n bundle",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Rule::MissingBundle => "Localization bundle that is expected to be available",
            Rule::MissingKey => "Localization key that is expected to be available",
            Rule::MissingValue => "Localization value that is expected to be available",
            Rule::UnusedBundle => "Localization bundle that is not expected to be available",
        }
    }

    pub fn severity(self) -> Severity {
        match self {
            Rule::MissingBundle | Rule::MissingKey => Severity::Critical,
            Rule::MissingValue => Severity::Major,
            Rule::UnusedBundle => Severity::Minor,
        }
    }

    pub fn capabilities(self) -> &'static [Capability] {
        match self {
            Rule::MissingBundle => &[],
            Rule::MissingKey | Rule::UnusedBundle => &[Capability::NeedsKeys],
            Rule::MissingValue => &[Capability::NeedsKeys, Capability::NeedsValues],
        }
    }

    /// Look a rule up by key, ignoring case, `-` and `_`
    /// (`MissingKey`, `missing-key` and `missing_key` are the same rule)
    pub fn from_key(key: &str) -> Option<Rule> {
        let wanted = normalize_key(key);
        Rule::ALL
            .into_iter()
            .find(|rule| normalize_key(rule.key()) == wanted)
    }

    /// Run the check
    pub fn check(self, project: &BundleProject, locales: &BTreeSet<Locale>) -> Vec<Violation> {
        match self {
            Rule::MissingBundle => missing_bundle::check(project, locales),
            Rule::MissingKey => missing_key::check(project, locales),
            Rule::MissingValue => missing_value::check(project, locales),
            Rule::UnusedBundle => unused_bundle::check(project, locales),
        }
    }
}

fn normalize_key(key: &str) -> String {
    key.trim()
        .chars()
        .filter(|c| *c != '-' && *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.key())
    }
}

/// Rules active for one run, built once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    active: Vec<Rule>,
}

impl RuleSet {
    /// Keep catalogue order whatever the input order
    pub fn new(active: impl IntoIterator<Item = Rule>) -> Self {
        let wanted: BTreeSet<Rule> = active.into_iter().collect();
        Self {
            active: Rule::ALL
                .into_iter()
                .filter(|rule| wanted.contains(rule))
                .collect(),
        }
    }

    /// Every rule of the catalogue
    pub fn all() -> Self {
        Self::new(Rule::ALL)
    }

    pub fn rules(&self) -> &[Rule] {
        &self.active
    }

    pub fn is_active(&self, rule: Rule) -> bool {
        self.active.contains(&rule)
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Union of the capabilities of the active rules
    pub fn capabilities(&self) -> Capabilities {
        self.active
            .iter()
            .flat_map(|rule| rule.capabilities().iter().copied())
            .collect()
    }
}

/// Where a violation is reported
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resource {
    pub directory: PathBuf,
    pub bundle: String,
    pub locale: Locale,
    pub file_name: String,
}

impl Resource {
    /// The file of `bundle` for `locale`; the conventional name when the
    /// file does not exist
    pub fn for_locale(bundle: &Bundle, locale: &Locale) -> Self {
        let file_name = bundle
            .files()
            .get(locale)
            .and_then(|file| file.path().file_name())
            .and_then(|name| name.to_str())
            .map_or_else(|| bundle.id().file_name(locale), ToString::to_string);
        Self {
            directory: bundle.id().directory.clone(),
            bundle: bundle.name().to_string(),
            locale: locale.clone(),
            file_name,
        }
    }

    pub fn path(&self) -> PathBuf {
        self.directory.join(&self.file_name)
    }

    /// Path relative to `base` when it lies below it
    pub fn display_path(&self, base: &Path) -> String {
        let path = self.path();
        path.strip_prefix(base)
            .unwrap_or(&path)
            .display()
            .to_string()
    }
}

/// One finding of one rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub rule: Rule,
    pub severity: Severity,
    pub resource: Resource,
    pub message: String,
}

impl Violation {
    pub fn new(rule: Rule, resource: Resource, message: String) -> Self {
        Self {
            rule,
            severity: rule.severity(),
            resource,
            message,
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::path::Path;

    use crate::bundle::{BundleProject, BundleProjectBuilder};
    use crate::rules::{Capabilities, Capability};
    use tempfile::TempDir;

    /// Write `(file name, content)` pairs and build a project over them
    pub fn project(files: &[(&str, &str)], excluded: &[&str]) -> (TempDir, BundleProject) {
        let temp = TempDir::new().unwrap();
        let paths: Vec<_> = files
            .iter()
            .map(|(name, content)| {
                let path = temp.path().join(name);
                std::fs::write(&path, content).unwrap();
                path
            })
            .collect();
        let capabilities: Capabilities = [Capability::NeedsKeys, Capability::NeedsValues]
            .into_iter()
            .collect();
        let builder = BundleProjectBuilder::new(
            excluded.iter().map(ToString::to_string).collect(),
            capabilities,
        );
        let project = builder.build(&paths);
        (temp, project)
    }

    pub fn messages(violations: &[crate::rules::Violation]) -> Vec<String> {
        violations.iter().map(|v| v.message.clone()).collect()
    }

    pub fn file_names(violations: &[crate::rules::Violation], base: &Path) -> Vec<String> {
        violations
            .iter()
            .map(|v| v.resource.display_path(base))
            .collect()
    }
}
