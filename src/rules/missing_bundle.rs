//! MissingBundle: a checked locale has no file in the bundle

use std::collections::BTreeSet;

use super::{Resource, Rule, Violation};
use crate::bundle::BundleProject;
use crate::locale::Locale;

pub fn check(project: &BundleProject, locales: &BTreeSet<Locale>) -> Vec<Violation> {
    let mut violations = Vec::new();
    for bundle in project.bundles() {
        for locale in locales.iter().filter(|l| !bundle.files().contains_key(*l)) {
            violations.push(Violation::new(
                Rule::MissingBundle,
                Resource::for_locale(bundle, locale),
                format!(
                    "Bundle '{}' is missing{}",
                    bundle.name(),
                    locale.message_suffix()
                ),
            ));
        }
    }
    violations
}
