//! UnusedBundle: a bundle without any key, or a file for a locale nobody
//! checks
//!
//! Files emptied by key exclusion are "fully filtered", not unused, and are
//! never reported.

use std::collections::BTreeSet;

use super::{Resource, Rule, Violation};
use crate::bundle::BundleProject;
use crate::locale::Locale;

pub fn check(project: &BundleProject, locales: &BTreeSet<Locale>) -> Vec<Violation> {
    let mut violations = Vec::new();
    for bundle in project.bundles() {
        if bundle.keys().is_empty() {
            for (locale, _) in bundle
                .files()
                .iter()
                .filter(|(_, file)| !file.all_keys_excluded())
            {
                violations.push(Violation::new(
                    Rule::UnusedBundle,
                    Resource::for_locale(bundle, locale),
                    format!("Bundle '{}' is empty for all locales", bundle.name()),
                ));
            }
        } else {
            for locale in bundle.files().keys().filter(|l| !locales.contains(*l)) {
                violations.push(Violation::new(
                    Rule::UnusedBundle,
                    Resource::for_locale(bundle, locale),
                    format!(
                        "Bundle '{}' is unused{}",
                        bundle.name(),
                        locale.message_suffix()
                    ),
                ));
            }
        }
    }
    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::locale;
    use crate::rules::test_support::{messages, project};

    #[test]
    fn test_unchecked_locale_is_unused() {
        let (_temp, project) = project(&[("old_de.properties", "a=1\n")], &[]);
        let locales = [locale("en")].into_iter().collect();

        let violations = check(&project, &locales);

        assert_eq!(
            messages(&violations),
            ["Bundle 'old' is unused for the locale 'de'"]
        );
        assert_eq!(violations[0].resource.bundle, "old");
        assert_eq!(violations[0].resource.locale, locale("de"));
    }

    #[test]
    fn test_empty_bundle_reported_per_file() {
        let (_temp, project) = project(
            &[
                ("empty.properties", "# nothing yet\n"),
                ("empty_fr.properties", ""),
            ],
            &[],
        );
        let locales = [Locale::Unlocalized, locale("fr")].into_iter().collect();

        assert_eq!(
            messages(&check(&project, &locales)),
            [
                "Bundle 'empty' is empty for all locales",
                "Bundle 'empty' is empty for all locales",
            ]
        );
    }

    #[test]
    fn test_fully_excluded_file_is_not_reported() {
        let (_temp, project) = project(&[("internal.properties", "internal.x=v\n")], &["internal."]);
        let locales = [Locale::Unlocalized].into_iter().collect();

        let bundle = project.bundles().next().unwrap();
        assert!(bundle.keys().is_empty());
        assert!(check(&project, &locales).is_empty());
    }

    #[test]
    fn test_mixed_empty_and_excluded_files() {
        let (_temp, project) = project(
            &[
                ("conf.properties", "internal.x=v\n"),
                ("conf_fr.properties", ""),
            ],
            &["internal."],
        );
        let locales = [Locale::Unlocalized, locale("fr")].into_iter().collect();

        let violations = check(&project, &locales);

        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].resource.locale, locale("fr"));
    }

    #[test]
    fn test_used_bundle_is_silent() {
        let (_temp, project) = project(
            &[("labels.properties", "a=1\n"), ("labels_fr.properties", "a=un\n")],
            &[],
        );
        let locales = [Locale::Unlocalized, locale("fr")].into_iter().collect();

        assert!(check(&project, &locales).is_empty());
    }
}
