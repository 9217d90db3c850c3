//! Bundle name and locale from a file name
//!
//! `messages_fr_FR.properties` belongs to bundle `messages` with locale
//! `fr_FR`; `messages.properties` is the unlocalized file of the same bundle.

use std::path::Path;

use thiserror::Error;

use crate::locale::{Locale, LocaleError, LocaleTag};

/// Separator between bundle name and locale in a file name
pub const NAME_LOCALE_SEPARATOR: char = '_';

/// Why a file cannot be attributed to a bundle
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentityError {
    #[error("Invalid bundle file name")]
    InvalidFileName,

    #[error("Invalid (empty) bundle name")]
    EmptyName,

    #[error("Invalid bundle locale '{token}'")]
    InvalidLocale {
        token: String,
        #[source]
        source: LocaleError,
    },
}

/// Split a base name (extension stripped) on the first separator.
///
/// Returns the raw name part and the locale token when a separator is
/// present. No validation happens here.
pub fn split_file_name(base_name: &str) -> (&str, Option<&str>) {
    match base_name.split_once(NAME_LOCALE_SEPARATOR) {
        Some((name, token)) => (name, Some(token)),
        None => (base_name, None),
    }
}

/// Resolve `(bundle name, locale)` for a base name.
///
/// A blank name is rejected even when a locale follows. A locale token must
/// parse to a concrete locale: once the separator is present the file never
/// falls back to the unlocalized bucket.
pub fn parse_base_name(base_name: &str) -> Result<(String, Locale), IdentityError> {
    if base_name.is_empty() {
        return Err(IdentityError::InvalidFileName);
    }

    let (name, token) = split_file_name(base_name);
    let name = name.trim();
    if name.is_empty() {
        return Err(IdentityError::EmptyName);
    }

    let locale = match token {
        None => Locale::Unlocalized,
        Some(token) => token
            .parse::<LocaleTag>()
            .map(Locale::Tag)
            .map_err(|source| IdentityError::InvalidLocale {
                token: token.to_string(),
                source,
            })?,
    };

    Ok((name.to_string(), locale))
}

/// Resolve `(bundle name, locale)` for a file path
pub fn parse_path(path: &Path) -> Result<(String, Locale), IdentityError> {
    let base_name = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .ok_or(IdentityError::InvalidFileName)?;
    parse_base_name(base_name)
}
