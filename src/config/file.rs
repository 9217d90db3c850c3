//! Audit configuration file (l10n-audit.yaml) data structures

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, error};

use super::csv;
use crate::error::{self, Result};
use crate::locale::NO_LOCALE_SENTINEL;
use crate::rules::{Rule, RuleSet};

/// Name of the configuration file looked up in the project directory
pub const CONFIG_FILE_NAME: &str = "l10n-audit.yaml";

/// A list given either as one comma separated string or as a YAML sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CsvList {
    Csv(String),
    /// A `null` entry stands for the no-locale sentinel
    List(Vec<Option<String>>),
}

impl CsvList {
    /// Entries with the same clean-up as a CSV string
    pub fn values(&self) -> Vec<String> {
        match self {
            CsvList::Csv(value) => csv::split(value),
            CsvList::List(items) => {
                let joined: Vec<&str> = items
                    .iter()
                    .map(|item| item.as_deref().unwrap_or(NO_LOCALE_SENTINEL))
                    .collect();
                csv::split(&joined.join(","))
            }
        }
    }
}

/// Audit configuration (l10n-audit.yaml)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AuditConfig {
    /// Locales to check; `null` is the unlocalized file
    #[serde(deserialize_with = "null_is_sentinel")]
    pub locales: Option<CsvList>,

    /// Keys starting with one of these are ignored
    pub exclude_key_prefixes: Option<CsvList>,

    /// Directories to scan, relative to the project directory
    pub source_directories: Option<CsvList>,

    /// Rule activation by rule key; rules not listed are enabled
    pub rules: BTreeMap<String, bool>,
}

/// A present but null `locales` value selects the unlocalized file only
fn null_is_sentinel<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<Option<CsvList>, D::Error> {
    let list = Option::<CsvList>::deserialize(deserializer)?;
    Ok(Some(list.unwrap_or(CsvList::List(vec![None]))))
}

impl AuditConfig {
    /// Parse audit configuration from YAML string
    ///
    /// An empty or comment-only document is the default configuration.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let value: serde_yaml::Value = serde_yaml::from_str(yaml)?;
        if value.is_null() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_value(value)?;
        Ok(config)
    }

    /// Load the configuration file at `path`
    pub fn load(path: &Path) -> Result<Self> {
        let shown = path.display().to_string();
        if !path.is_file() {
            return Err(error::config::not_found(shown));
        }
        let yaml = std::fs::read_to_string(path)
            .map_err(|e| error::config::read_failed(&shown, e.to_string()))?;
        debug!("Loading configuration from {}", path.display());
        Self::from_yaml(&yaml).map_err(|e| match e {
            crate::error::AuditError::ConfigParseFailed { reason, .. } => {
                error::config::parse_failed(shown, reason)
            }
            other => other,
        })
    }

    /// Rules enabled by the `rules` section
    ///
    /// Unknown rule keys are logged and ignored.
    pub fn rule_set(&self) -> RuleSet {
        if self.rules.is_empty() {
            return RuleSet::all();
        }
        let mut disabled = Vec::new();
        for (key, enabled) in &self.rules {
            match Rule::from_key(key) {
                Some(rule) if !enabled => disabled.push(rule),
                Some(_) => {}
                None => error!("rules: unknown rule '{key}' ignored"),
            }
        }
        RuleSet::new(
            Rule::ALL
                .into_iter()
                .filter(|rule| !disabled.contains(rule)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_from_yaml_full() {
        let yaml = r"
locales: null, fr, de_DE
exclude_key_prefixes: [internal., debug.]
source_directories: src/main/resources
rules:
  UnusedBundle: false
";
        let config = AuditConfig::from_yaml(yaml).unwrap();
        assert_eq!(
            config.locales.as_ref().unwrap().values(),
            ["null", "fr", "de_DE"]
        );
        assert_eq!(
            config.exclude_key_prefixes.as_ref().unwrap().values(),
            ["internal.", "debug."]
        );
        assert_eq!(
            config.source_directories.as_ref().unwrap().values(),
            ["src/main/resources"]
        );
        assert_eq!(config.rules.get("UnusedBundle"), Some(&false));
    }

    #[test]
    fn test_yaml_null_entry_is_sentinel() {
        let config = AuditConfig::from_yaml("locales: [~, fr, '', fr]\n").unwrap();
        assert_eq!(config.locales.unwrap().values(), ["null", "fr"]);
    }

    #[test]
    fn test_null_locales_is_sentinel() {
        for yaml in ["locales: null\n", "locales: ~\n", "locales:\n"] {
            let config = AuditConfig::from_yaml(yaml).unwrap();
            assert_eq!(config.locales.unwrap().values(), ["null"], "{yaml}");
        }
        let config = AuditConfig::from_yaml("rules: {}\n").unwrap();
        assert_eq!(config.locales, None);
    }

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(AuditConfig::from_yaml("").unwrap(), AuditConfig::default());
        assert_eq!(
            AuditConfig::from_yaml("# nothing configured\n").unwrap(),
            AuditConfig::default()
        );
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let result = AuditConfig::from_yaml("locale: fr\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_rule_set_defaults_to_all() {
        assert_eq!(AuditConfig::default().rule_set(), RuleSet::all());
    }

    #[test]
    fn test_rule_set_disables_and_ignores_unknown() {
        let config = AuditConfig::from_yaml(
            "rules:\n  unused-bundle: false\n  MissingKey: true\n  Bogus: false\n",
        )
        .unwrap();
        let set = config.rule_set();
        assert!(!set.is_active(Rule::UnusedBundle));
        assert!(set.is_active(Rule::MissingKey));
        assert!(set.is_active(Rule::MissingBundle));
        assert!(set.is_active(Rule::MissingValue));
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = AuditConfig::load(&temp.path().join(CONFIG_FILE_NAME)).unwrap_err();
        assert!(err.to_string().contains("Configuration file not found"));
    }

    #[test]
    fn test_load_reports_path_on_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "locales: [fr\n").unwrap();

        let err = AuditConfig::load(&path).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Failed to parse configuration file"));
        assert!(message.contains(CONFIG_FILE_NAME));
    }
}
