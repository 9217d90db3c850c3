//! Effective settings of one audit run
//!
//! Values come from the configuration file, and each one given on the
//! command line replaces the file's value as a whole.

use std::path::{Path, PathBuf};

use tracing::{debug, error};

use super::{AuditConfig, CONFIG_FILE_NAME, CsvList, csv};
use crate::error::{self, Result};
use crate::rules::{Rule, RuleSet};

/// Command line values taking precedence over the configuration file
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub locales: Option<String>,
    pub exclude_key_prefixes: Option<String>,
    pub source_directories: Option<String>,
    /// Restrict the run to these rules
    pub rules: Vec<Rule>,
}

/// Merged configuration the audit runs with
#[derive(Debug, Clone)]
pub struct Settings {
    pub project_dir: PathBuf,
    /// Raw locale entries, validated by the locale resolver
    pub locales: Vec<String>,
    pub excluded_key_prefixes: Vec<String>,
    /// Raw directory entries, relative to `project_dir`
    pub source_directories: Vec<String>,
    pub rules: RuleSet,
}

impl Settings {
    pub fn new(project_dir: impl Into<PathBuf>, config: &AuditConfig, overrides: &Overrides) -> Self {
        let pick = |cli: &Option<String>, file: &Option<CsvList>| match (cli, file) {
            (Some(value), _) => csv::split(value),
            (None, Some(list)) => list.values(),
            (None, None) => Vec::new(),
        };
        let rules = if overrides.rules.is_empty() {
            config.rule_set()
        } else {
            RuleSet::new(overrides.rules.iter().copied())
        };
        Self {
            project_dir: project_dir.into(),
            locales: pick(&overrides.locales, &config.locales),
            excluded_key_prefixes: pick(&overrides.exclude_key_prefixes, &config.exclude_key_prefixes),
            source_directories: pick(&overrides.source_directories, &config.source_directories),
            rules,
        }
    }

    /// Resolve the project directory and configuration file, then merge
    /// `overrides` on top.
    ///
    /// A configuration file named explicitly must load. The implicit
    /// `l10n-audit.yaml` of the project is optional, and a broken one is
    /// logged and ignored.
    pub fn load(
        project_dir: Option<PathBuf>,
        config_path: Option<PathBuf>,
        overrides: &Overrides,
    ) -> Result<Self> {
        let project_dir = match project_dir {
            Some(dir) => dir,
            None => std::env::current_dir()?,
        };
        if !project_dir.is_dir() {
            return Err(error::fs::project_not_found(
                project_dir.display().to_string(),
            ));
        }

        let config = match config_path {
            Some(path) => AuditConfig::load(&path)?,
            None => implicit_config(&project_dir),
        };
        debug!("Configuration: {config:?}");

        Ok(Self::new(project_dir, &config, overrides))
    }
}

fn implicit_config(project_dir: &Path) -> AuditConfig {
    let path = project_dir.join(CONFIG_FILE_NAME);
    if !path.is_file() {
        return AuditConfig::default();
    }
    AuditConfig::load(&path).unwrap_or_else(|e| {
        error!("{e}, using default configuration");
        AuditConfig::default()
    })
}
