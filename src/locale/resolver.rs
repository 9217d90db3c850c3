//! Effective locale set resolution
//!
//! Configured locales win outright. When nothing valid is configured, every
//! locale observed while scanning the bundles is checked instead.

use std::collections::BTreeSet;

use tracing::{error, info};

use super::Locale;

/// Resolve the locales every rule checks against.
///
/// Invalid configured entries are logged and dropped; blank ones are ignored.
/// The result is never a merge: either the parsed configuration (when it
/// contains at least one locale) or exactly `discovered`.
pub fn resolve_locales<S: AsRef<str>>(
    configured: &[S],
    discovered: &BTreeSet<Locale>,
) -> BTreeSet<Locale> {
    let mut locales = BTreeSet::new();
    for token in configured {
        match Locale::parse_optional(token.as_ref()) {
            Ok(Some(locale)) => {
                locales.insert(locale);
            }
            Ok(None) => {}
            Err(e) => error!("locales: cannot create locale: {e}"),
        }
    }

    if locales.is_empty() {
        info!(
            "locales: {}, no locale (properly) configured, falling back to locales auto-discovered",
            display_locales(discovered)
        );
        return discovered.clone();
    }

    info!("locales: {}", display_locales(&locales));
    locales
}

/// `[null, de, fr]` style listing for logs and summaries
pub fn display_locales(locales: &BTreeSet<Locale>) -> String {
    let items: Vec<String> = locales.iter().map(ToString::to_string).collect();
    format!("[{}]", items.join(", "))
}
