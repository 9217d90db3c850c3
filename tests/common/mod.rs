//! Common test utilities for l10n-audit integration tests

use std::path::PathBuf;
use tempfile::TempDir;

/// A project directory for integration tests
pub struct TestProject {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to project root
    pub path: PathBuf,
}

impl TestProject {
    /// Create an empty test project
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in the project
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Write a bundle file below `src/main/resources`
    pub fn write_resource(&self, name: &str, content: &str) {
        self.write_file(&format!("src/main/resources/{name}"), content);
    }

    /// Project with one complete and one incomplete bundle:
    /// `labels_fr` lacks key `b`, `labels` has a blank `b`
    #[allow(dead_code)]
    pub fn with_labels() -> Self {
        let project = Self::new();
        project.write_resource("labels.properties", "a=1\nb=\n");
        project.write_resource("labels_fr.properties", "a=un\n");
        project.write_resource("menu.properties", "open=Open\n");
        project.write_resource("menu_fr.properties", "open=Ouvrir\n");
        project
    }
}
