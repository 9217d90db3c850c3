//! One audit run: scan, resolve locales, evaluate rules, report

use tracing::{debug, info, warn};

use crate::bundle::BundleProjectBuilder;
use crate::config::Settings;
use crate::config::sources;
use crate::error::Result;
use crate::locale::resolver::{display_locales, resolve_locales};
use crate::report::{Summary, ViolationSink};

/// Run every active rule of `settings` and hand the violations to `sink`.
///
/// Returns `None` without touching the file system or the sink when no rule
/// is active.
pub fn run_audit(settings: &Settings, sink: &mut dyn ViolationSink) -> Result<Option<Summary>> {
    if settings.rules.is_empty() {
        warn!("No active rule");
        return Ok(None);
    }

    let directories = sources::resolve_directories(&settings.project_dir, &settings.source_directories);
    let files = sources::collect_files(&directories);

    let capabilities = settings.rules.capabilities();
    debug!("Requested capabilities: {capabilities:?}");
    let builder = BundleProjectBuilder::new(settings.excluded_key_prefixes.clone(), capabilities);
    let project = builder.build(&files);

    let locales = resolve_locales(&settings.locales, project.locales());

    let stats = project.stats();
    let mut summary = Summary {
        files_scanned: stats.files_seen - stats.files_skipped,
        files_skipped: stats.files_skipped,
        bundles: project.bundle_count(),
        locales: locales.iter().cloned().collect(),
        rules: settings.rules.rules().to_vec(),
        ..Summary::default()
    };

    for rule in settings.rules.rules() {
        let violations = rule.check(&project, &locales);
        debug!("{rule}: {} violation(s)", violations.len());
        for violation in violations {
            summary.count(violation.rule);
            sink.report(violation)?;
        }
    }

    info!(
        "Checked {} bundle(s) for locales {}: {} violation(s)",
        summary.bundles,
        display_locales(&locales),
        summary.total()
    );
    sink.finish(&summary)?;
    Ok(Some(summary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AuditConfig, Overrides};
    use crate::locale::{Locale, locale};
    use crate::rules::{Rule, Violation};
    use std::path::Path;
    use tempfile::TempDir;

    fn write(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
    }

    fn settings(root: &Path, yaml: &str, overrides: &Overrides) -> Settings {
        Settings::new(root, &AuditConfig::from_yaml(yaml).unwrap(), overrides)
    }

    #[test]
    fn test_missing_key_and_value() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "i18n/labels.properties", "a=1\nb=\n");
        write(temp.path(), "i18n/labels_fr.properties", "a=un\n");
        let settings = settings(
            temp.path(),
            "locales: null, fr\nsource_directories: i18n\n",
            &Overrides::default(),
        );

        let mut violations: Vec<Violation> = Vec::new();
        let summary = run_audit(&settings, &mut violations).unwrap().unwrap();

        let found: Vec<(Rule, Locale, &str)> = violations
            .iter()
            .map(|v| (v.rule, v.resource.locale.clone(), v.message.as_str()))
            .collect();
        assert_eq!(
            found,
            [
                (
                    Rule::MissingKey,
                    locale("fr"),
                    "Key 'b' is not translated for the locale 'fr'"
                ),
                (Rule::MissingValue, Locale::Unlocalized, "Value 'b' is missing"),
            ]
        );
        assert_eq!(summary.files_scanned, 2);
        assert_eq!(summary.bundles, 1);
        assert_eq!(summary.total(), 2);
    }

    #[test]
    fn test_discovered_locales_when_none_configured() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "src/main/resources/msg.properties", "a=1\n");
        write(temp.path(), "src/main/resources/msg_de.properties", "a=eins\n");
        write(temp.path(), "src/main/java/app/other_it.properties", "x=y\n");
        let settings = settings(temp.path(), "", &Overrides::default());

        let mut violations: Vec<Violation> = Vec::new();
        let summary = run_audit(&settings, &mut violations).unwrap().unwrap();

        assert_eq!(
            summary.locales,
            [Locale::Unlocalized, locale("de"), locale("it")]
        );
        let messages: Vec<&str> = violations.iter().map(|v| v.message.as_str()).collect();
        assert_eq!(
            messages,
            [
                "Bundle 'other' is missing",
                "Bundle 'other' is missing for the locale 'de'",
                "Bundle 'msg' is missing for the locale 'it'",
            ]
        );
    }

    #[test]
    fn test_unused_bundle_for_unchecked_locale() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "res/old_de.properties", "a=1\n");
        let overrides = Overrides {
            locales: Some("en".to_string()),
            source_directories: Some("res".to_string()),
            rules: vec![Rule::UnusedBundle],
            ..Overrides::default()
        };
        let settings = settings(temp.path(), "", &overrides);

        let mut violations: Vec<Violation> = Vec::new();
        run_audit(&settings, &mut violations).unwrap();

        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].message, "Bundle 'old' is unused for the locale 'de'");
    }

    #[test]
    fn test_no_active_rule_does_nothing() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "src/main/resources/msg_de.properties", "a=\n");
        let yaml = "rules:\n  MissingBundle: false\n  MissingKey: false\n  MissingValue: false\n  UnusedBundle: false\n";
        let settings = settings(temp.path(), yaml, &Overrides::default());

        let mut violations: Vec<Violation> = Vec::new();
        let summary = run_audit(&settings, &mut violations).unwrap();

        assert!(summary.is_none());
        assert!(violations.is_empty());
    }

    #[test]
    fn test_skipped_files_are_counted() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "res/msg.properties", "a=1\n");
        write(temp.path(), "res/msg_xx_yy_zz_ww.properties", "a=1\n");
        let overrides = Overrides {
            source_directories: Some("res".to_string()),
            ..Overrides::default()
        };
        let settings = settings(temp.path(), "", &overrides);

        let mut violations: Vec<Violation> = Vec::new();
        let summary = run_audit(&settings, &mut violations).unwrap().unwrap();

        assert_eq!(summary.files_scanned, 1);
        assert_eq!(summary.files_skipped, 1);
        assert!(violations.is_empty());
    }
}
