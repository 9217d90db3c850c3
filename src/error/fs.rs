//! File system errors

use super::AuditError;

/// Creates a project not found error
pub fn project_not_found(path: impl Into<String>) -> AuditError {
    AuditError::ProjectNotFound { path: path.into() }
}
