//! Source directories and bundle file enumeration

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use tracing::{debug, error, info};
use walkdir::WalkDir;

use crate::bundle::FILE_EXTENSION;

/// Directories scanned when none of the configured ones is usable
pub const DEFAULT_SOURCE_DIRECTORIES: &[&str] = &["src/main/resources", "src/main/java"];

/// Resolve `configured` against `project_dir`, keeping usable directories.
///
/// Invalid entries are logged and dropped. When nothing usable remains the
/// defaults are tried, silently skipping those that do not exist.
pub fn resolve_directories<S: AsRef<str>>(project_dir: &Path, configured: &[S]) -> Vec<PathBuf> {
    let mut directories = BTreeSet::new();
    for entry in configured.iter().map(|e| e.as_ref().trim()) {
        if entry.is_empty() {
            continue;
        }
        if let Some(directory) = usable_directory(project_dir, entry) {
            directories.insert(directory);
        } else {
            error!(
                "source_directories: invalid directory '{}'",
                project_dir.join(entry).display()
            );
        }
    }

    if directories.is_empty() {
        info!(
            "source_directories: no directory (properly) configured, falling back to default directories '{}'",
            DEFAULT_SOURCE_DIRECTORIES.join(", ")
        );
        directories.extend(
            DEFAULT_SOURCE_DIRECTORIES
                .iter()
                .filter_map(|entry| usable_directory(project_dir, entry)),
        );
    }

    let directories: Vec<PathBuf> = directories.into_iter().collect();
    info!("source_directories: {directories:?}");
    directories
}

fn usable_directory(project_dir: &Path, entry: &str) -> Option<PathBuf> {
    let directory = project_dir.join(entry);
    (directory.is_dir() && std::fs::read_dir(&directory).is_ok()).then_some(directory)
}

/// Every `.properties` file below `directories`, sorted and de-duplicated
pub fn collect_files(directories: &[PathBuf]) -> Vec<PathBuf> {
    let files: BTreeSet<PathBuf> = directories
        .iter()
        .flat_map(|directory| {
            WalkDir::new(directory)
                .follow_links(true)
                .into_iter()
                .filter_map(std::result::Result::ok)
                .filter(|e| e.file_type().is_file())
                .filter(|e| {
                    e.path()
                        .extension()
                        .is_some_and(|ext| ext == FILE_EXTENSION)
                })
                .map(walkdir::DirEntry::into_path)
        })
        .collect();
    debug!("{} candidate bundle file(s) found", files.len());
    files.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(root: &Path, relative: &str) -> PathBuf {
        let path = root.join(relative);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "a=1\n").unwrap();
        path
    }

    #[test]
    fn test_configured_directories() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join("i18n")).unwrap();
        std::fs::create_dir_all(temp.path().join("src/main/resources")).unwrap();

        let dirs = resolve_directories(temp.path(), &[" i18n ", "missing", ""]);

        assert_eq!(dirs, [temp.path().join("i18n")]);
    }

    #[test]
    fn test_falls_back_to_existing_defaults() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join("src/main/resources")).unwrap();

        let dirs = resolve_directories(temp.path(), &["missing"]);

        assert_eq!(dirs, [temp.path().join("src/main/resources")]);
    }

    #[test]
    fn test_file_is_not_a_directory() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "labels.properties");

        let dirs = resolve_directories(temp.path(), &["labels.properties"]);

        assert!(dirs.is_empty());
    }

    #[test]
    fn test_collect_files_filters_and_sorts() {
        let temp = TempDir::new().unwrap();
        let b = touch(temp.path(), "res/b.properties");
        let a = touch(temp.path(), "res/nested/a_fr.properties");
        touch(temp.path(), "res/readme.txt");
        touch(temp.path(), "res/properties");

        let files = collect_files(&[temp.path().join("res")]);

        let mut expected = vec![a, b];
        expected.sort();
        assert_eq!(files, expected);
    }

    #[test]
    fn test_overlapping_directories_are_deduplicated() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "res/nested/a.properties");

        let files = collect_files(&[temp.path().join("res"), temp.path().join("res/nested")]);

        assert_eq!(files.len(), 1);
    }
}
