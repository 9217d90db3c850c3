//! Excluded key prefixes

use super::Properties;

/// Outcome of filtering one file's properties
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filtered {
    pub properties: Properties,
    /// The file had keys and every one of them was excluded
    pub all_keys_excluded: bool,
}

/// Remove every key starting with one of `excluded_prefixes`.
///
/// Matching is a plain case-sensitive prefix test. Empty input or an empty
/// prefix list is returned untouched with `all_keys_excluded == false`.
pub fn apply<S: AsRef<str>>(mut properties: Properties, excluded_prefixes: &[S]) -> Filtered {
    if properties.is_empty() || excluded_prefixes.is_empty() {
        return Filtered {
            properties,
            all_keys_excluded: false,
        };
    }

    properties.retain(|key, _| {
        !excluded_prefixes
            .iter()
            .any(|prefix| key.starts_with(prefix.as_ref()))
    });

    Filtered {
        all_keys_excluded: properties.is_empty(),
        properties,
    }
}
