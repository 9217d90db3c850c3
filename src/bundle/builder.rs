//! Aggregation of bundle files into a [`BundleProject`]
//!
//! Every candidate file is handled on its own: a file that cannot be opened,
//! named or read is logged and skipped, and the run goes on with the others.
//! File content is only parsed when an active rule asked for keys or values.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

use super::identity::{self, IdentityError};
use super::properties::PropertiesError;
use super::{BundleFile, BundleId, BundleProject, Properties, exclusion, properties};
use crate::locale::Locale;
use crate::rules::{Capabilities, Capability};

/// Why a candidate file was left out of the project
#[derive(Error, Debug)]
enum SkipReason {
    #[error("not a regular file")]
    NotAFile,

    #[error("cannot open file: {0}")]
    Unreadable(#[source] std::io::Error),

    #[error(transparent)]
    Identity(#[from] IdentityError),

    #[error("cannot read file: {0}")]
    ReadFailed(#[source] std::io::Error),

    #[error(transparent)]
    Malformed(#[from] PropertiesError),
}

/// Builds a [`BundleProject`] from a list of files
#[derive(Debug, Clone, Default)]
pub struct BundleProjectBuilder {
    excluded_key_prefixes: Vec<String>,
    capabilities: Capabilities,
}

impl BundleProjectBuilder {
    /// `capabilities` is the union of what the active rules need
    pub fn new(excluded_key_prefixes: Vec<String>, capabilities: Capabilities) -> Self {
        Self {
            excluded_key_prefixes,
            capabilities,
        }
    }

    fn loads_content(&self) -> bool {
        self.capabilities.contains(&Capability::NeedsKeys)
            || self.capabilities.contains(&Capability::NeedsValues)
    }

    fn keeps_values(&self) -> bool {
        self.capabilities.contains(&Capability::NeedsValues)
    }

    /// Aggregate `files` into a new project.
    ///
    /// Files are processed in sorted path order, so when two files map to
    /// the same bundle and locale the last one in that order wins.
    pub fn build<I, P>(&self, files: I) -> BundleProject
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut files: Vec<PathBuf> = files.into_iter().map(|p| p.as_ref().to_path_buf()).collect();
        files.sort();
        files.dedup();

        let mut project = BundleProject::default();
        for file in &files {
            debug!("Processing file '{}'", file.display());
            project.stats_mut().files_seen += 1;
            if let Err(reason) = self.add_file(&mut project, file) {
                warn!("File '{}' ignored: {reason}", file.display());
                project.stats_mut().files_skipped += 1;
            }
        }
        project
    }

    fn add_file(&self, project: &mut BundleProject, path: &Path) -> Result<(), SkipReason> {
        if !path.is_file() {
            return Err(SkipReason::NotAFile);
        }
        let handle = File::open(path).map_err(SkipReason::Unreadable)?;

        let (name, locale) = identity::parse_path(path)?;

        let filtered = if self.loads_content() {
            let loaded = read_properties(handle, self.keeps_values())?;
            exclusion::apply(loaded, &self.excluded_key_prefixes)
        } else {
            exclusion::Filtered {
                properties: Properties::new(),
                all_keys_excluded: false,
            }
        };

        let directory = path.parent().map(Path::to_path_buf).unwrap_or_default();
        let id = BundleId::new(directory, name);
        debug!(
            "Bundle '{}' gets locale '{locale}' with {} key(s) from '{}'",
            id.name,
            filtered.properties.len(),
            path.display()
        );

        let file = BundleFile::new(path, filtered.properties, filtered.all_keys_excluded);
        let bundle = project.upsert(id, &locale);
        if let Some(previous) = bundle.insert_file(locale.clone(), file) {
            warn_replaced(bundle.name(), &locale, previous.path(), path);
        }
        Ok(())
    }
}

fn warn_replaced(name: &str, locale: &Locale, previous: &Path, current: &Path) {
    warn!(
        "Bundle '{name}' has several files for locale '{locale}': '{}' replaces '{}'",
        current.display(),
        previous.display()
    );
}

/// Read and parse one file; the handle is dropped on return
fn read_properties(mut handle: File, keep_values: bool) -> Result<Properties, SkipReason> {
    let mut bytes = Vec::new();
    handle.read_to_end(&mut bytes).map_err(SkipReason::ReadFailed)?;
    let content = properties::decode(bytes);
    Ok(properties::parse(&content, keep_values)?)
}
