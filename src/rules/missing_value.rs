//! MissingValue: a checked file has a key with a blank value

use std::collections::BTreeSet;

use super::{Resource, Rule, Violation};
use crate::bundle::BundleProject;
use crate::locale::Locale;

pub fn check(project: &BundleProject, locales: &BTreeSet<Locale>) -> Vec<Violation> {
    let mut violations = Vec::new();
    for bundle in project.bundles() {
        for (locale, file) in bundle.files().iter().filter(|(l, _)| locales.contains(*l)) {
            let blank = file
                .properties()
                .iter()
                .filter(|(_, value)| value.as_deref().is_none_or(is_blank));
            for (key, _) in blank {
                violations.push(Violation::new(
                    Rule::MissingValue,
                    Resource::for_locale(bundle, locale),
                    format!("Value '{key}' is missing{}", locale.message_suffix()),
                ));
            }
        }
    }
    violations
}

/// Blank once control characters and ASCII spaces are trimmed; other
/// Unicode whitespace such as U+00A0 counts as content
fn is_blank(value: &str) -> bool {
    value.trim_matches(|c: char| c <= ' ').is_empty()
}
