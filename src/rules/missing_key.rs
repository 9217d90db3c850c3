//! MissingKey: a checked file lacks a key present elsewhere in its bundle

use std::collections::BTreeSet;

use super::{Resource, Rule, Violation};
use crate::bundle::BundleProject;
use crate::locale::Locale;

pub fn check(project: &BundleProject, locales: &BTreeSet<Locale>) -> Vec<Violation> {
    let mut violations = Vec::new();
    for bundle in project.bundles() {
        for (locale, file) in bundle.files().iter().filter(|(l, _)| locales.contains(*l)) {
            let missing = bundle
                .keys()
                .iter()
                .filter(|key| !file.properties().contains_key(*key));
            for key in missing {
                violations.push(Violation::new(
                    Rule::MissingKey,
                    Resource::for_locale(bundle, locale),
                    format!(
                        "Key '{key}' is not translated{}",
                        locale.message_suffix()
                    ),
                ));
            }
        }
    }
    violations
}
