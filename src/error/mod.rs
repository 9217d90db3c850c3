//! Error types and handling for l10n-audit
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! The audit core never fails hard: invalid configuration entries and
//! unreadable bundle files are logged and skipped. The variants here cover
//! the outer surface only (configuration files the user named, report
//! output, and the `--fail-on-violations` gate).
//!
//! Constructor helpers are grouped by area:
//! - [`config`]: Configuration errors
//! - [`fs`]: File system errors

pub mod config;
pub mod fs;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for l10n-audit operations
#[derive(Error, Diagnostic, Debug)]
pub enum AuditError {
    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(
        code(l10n_audit::config::not_found),
        help("Create l10n-audit.yaml in the project directory or pass --config")
    )]
    ConfigNotFound { path: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(l10n_audit::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Failed to read configuration file: {path}: {reason}")]
    #[diagnostic(code(l10n_audit::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    // File system errors
    #[error("Project directory not found: {path}")]
    #[diagnostic(
        code(l10n_audit::fs::project_not_found),
        help("Pass an existing directory with --project")
    )]
    ProjectNotFound { path: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(l10n_audit::fs::io_error))]
    IoError { message: String },

    // Report errors
    #[error("Failed to write report: {reason}")]
    #[diagnostic(code(l10n_audit::report::write_failed))]
    ReportWriteFailed { reason: String },

    // Command line errors
    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(l10n_audit::cli::unknown_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnknownShell { shell: String },

    #[error("{count} localization violation(s) found")]
    #[diagnostic(
        code(l10n_audit::check::violations_found),
        help("Fix the reported bundles or run without --fail-on-violations")
    )]
    ViolationsFound { count: usize },
}

impl From<std::io::Error> for AuditError {
    fn from(err: std::io::Error) -> Self {
        AuditError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for AuditError {
    fn from(err: serde_yaml::Error) -> Self {
        AuditError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for AuditError {
    fn from(err: serde_json::Error) -> Self {
        AuditError::ReportWriteFailed {
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, AuditError>;
