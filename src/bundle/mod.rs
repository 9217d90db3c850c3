//! Bundle model
//!
//! A bundle is the group of `NAME[_LOCALE].properties` files sharing a
//! directory and a base name. The model is filled once by
//! [`BundleProjectBuilder`] and only read afterwards by the rules.
//!
//! Submodules:
//! - [`identity`]: file name to `(name, locale)` parsing
//! - [`exclusion`]: excluded key prefixes
//! - [`properties`]: `.properties` file parsing
//! - [`builder`]: aggregation of files into a [`BundleProject`]

pub mod builder;
pub mod exclusion;
pub mod identity;
pub mod properties;

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::locale::Locale;

pub use builder::BundleProjectBuilder;

/// Extension of the bundle files to audit
pub const FILE_EXTENSION: &str = "properties";

/// Key to value mapping of one file.
///
/// Values are `None` when only key presence was requested.
pub type Properties = BTreeMap<String, Option<String>>;

/// Identity of a bundle: directory plus base name
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct BundleId {
    pub directory: PathBuf,
    pub name: String,
}

impl BundleId {
    pub fn new(directory: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            name: name.into(),
        }
    }

    /// Conventional file name of this bundle for `locale`
    pub fn file_name(&self, locale: &Locale) -> String {
        match locale.tag() {
            Some(tag) => format!(
                "{}{}{tag}.{FILE_EXTENSION}",
                self.name,
                identity::NAME_LOCALE_SEPARATOR
            ),
            None => format!("{}.{FILE_EXTENSION}", self.name),
        }
    }
}

/// One physical file's contribution to a bundle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleFile {
    path: PathBuf,
    properties: Properties,
    all_keys_excluded: bool,
}

impl BundleFile {
    /// `all_keys_excluded` requires empty `properties`
    pub fn new(path: impl Into<PathBuf>, properties: Properties, all_keys_excluded: bool) -> Self {
        debug_assert!(!all_keys_excluded || properties.is_empty());
        Self {
            path: path.into(),
            properties,
            all_keys_excluded,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    /// Empty because every key was excluded, not because the file has none
    pub fn all_keys_excluded(&self) -> bool {
        self.all_keys_excluded
    }
}

/// A logical bundle with one file per discovered locale
#[derive(Debug, Clone)]
pub struct Bundle {
    id: BundleId,
    files: BTreeMap<Locale, BundleFile>,
    keys: BTreeSet<String>,
}

impl Bundle {
    pub fn new(id: BundleId) -> Self {
        Self {
            id,
            files: BTreeMap::new(),
            keys: BTreeSet::new(),
        }
    }

    pub fn id(&self) -> &BundleId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.id.name
    }

    pub fn files(&self) -> &BTreeMap<Locale, BundleFile> {
        &self.files
    }

    /// Union of the keys of every file of the bundle
    pub fn keys(&self) -> &BTreeSet<String> {
        &self.keys
    }

    /// Add a file, returning the file it replaced for the same locale
    pub(crate) fn insert_file(&mut self, locale: Locale, file: BundleFile) -> Option<BundleFile> {
        self.keys.extend(file.properties.keys().cloned());
        self.files.insert(locale, file)
    }
}

impl PartialEq for Bundle {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Bundle {}

/// Counters gathered while scanning
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScanStats {
    /// Candidate files handed to the builder
    pub files_seen: usize,
    /// Files ignored (unreadable, invalid name or locale, read failure)
    pub files_skipped: usize,
}

/// Every bundle found in one run plus the locales observed on disk
#[derive(Debug, Clone, Default)]
pub struct BundleProject {
    bundles: BTreeMap<BundleId, Bundle>,
    locales: BTreeSet<Locale>,
    stats: ScanStats,
}

impl BundleProject {
    pub fn bundles(&self) -> impl Iterator<Item = &Bundle> {
        self.bundles.values()
    }

    #[cfg(test)]
    pub fn bundle(&self, id: &BundleId) -> Option<&Bundle> {
        self.bundles.get(id)
    }

    pub fn bundle_count(&self) -> usize {
        self.bundles.len()
    }

    /// Locales observed while scanning, including [`Locale::Unlocalized`]
    pub fn locales(&self) -> &BTreeSet<Locale> {
        &self.locales
    }

    pub fn stats(&self) -> ScanStats {
        self.stats
    }

    /// Locate or create the bundle for `id`, registering `locale`
    pub(crate) fn upsert(&mut self, id: BundleId, locale: &Locale) -> &mut Bundle {
        self.locales.insert(locale.clone());
        self.bundles
            .entry(id.clone())
            .or_insert_with(|| Bundle::new(id))
    }

    pub(crate) fn stats_mut(&mut self) -> &mut ScanStats {
        &mut self.stats
    }
}
