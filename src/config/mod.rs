//! Configuration handling for l10n-audit
//!
//! This module contains:
//! - `l10n-audit.yaml` - Audit configuration file
//! - CSV list splitting shared by the file and the command line
//! - Source directory resolution and bundle file enumeration
//! - [`Settings`], the merged view the audit runs with

pub mod csv;
pub mod file;
pub mod settings;
pub mod sources;

// Re-export commonly used types
pub use file::{AuditConfig, CONFIG_FILE_NAME, CsvList};
pub use settings::{Overrides, Settings};
