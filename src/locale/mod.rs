//! Locale identifiers
//!
//! A [`Locale`] is either a concrete tag (`fr`, `fr_FR`, `en_US_POSIX`) or the
//! [`Locale::Unlocalized`] value carried by bundle files that have no locale
//! suffix (`messages.properties`). Both kinds are ordinary values: they are
//! compared, hashed and used as map keys the same way.

pub mod resolver;

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Configuration sentinel standing for [`Locale::Unlocalized`]
pub const NO_LOCALE_SENTINEL: &str = "null";

/// Canonical separator between locale parts
const CANONICAL_SEPARATOR: char = '_';

/// Accepted separators between locale parts (one per token)
const SEPARATORS: [char; 2] = ['_', '-'];

/// Reason a locale token was rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid locale '{token}': {reason}")]
pub struct LocaleError {
    pub token: String,
    pub reason: &'static str,
}

impl LocaleError {
    fn new(token: &str, reason: &'static str) -> Self {
        Self {
            token: token.to_string(),
            reason,
        }
    }
}

/// A concrete `(language, country?, variant?)` locale
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocaleTag {
    language: String,
    country: Option<String>,
    variant: Option<String>,
}

impl LocaleTag {
    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    pub fn variant(&self) -> Option<&str> {
        self.variant.as_deref()
    }
}

impl fmt::Display for LocaleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.language())?;
        match (self.country(), self.variant()) {
            (Some(country), Some(variant)) => write!(
                f,
                "{CANONICAL_SEPARATOR}{country}{CANONICAL_SEPARATOR}{variant}"
            ),
            (Some(country), None) => write!(f, "{CANONICAL_SEPARATOR}{country}"),
            (None, Some(variant)) => write!(
                f,
                "{CANONICAL_SEPARATOR}{CANONICAL_SEPARATOR}{variant}"
            ),
            (None, None) => Ok(()),
        }
    }
}

impl FromStr for LocaleTag {
    type Err = LocaleError;

    /// Parse `language[SEP country[SEP variant]]` where `SEP` is `_` or `-`.
    ///
    /// The language may be omitted when the token starts with the separator
    /// (`_GB`), and the country may be empty when a variant follows
    /// (`en__POSIX`).
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        if token.len() < 2 {
            return Err(LocaleError::new(token, "too short"));
        }

        let separator = token.chars().find(|c| SEPARATORS.contains(c));
        let Some(separator) = separator else {
            return parse_language(token).map(|language| LocaleTag {
                language,
                country: None,
                variant: None,
            });
        };

        if SEPARATORS
            .iter()
            .any(|other| *other != separator && token.contains(*other))
        {
            return Err(LocaleError::new(token, "mixed separators"));
        }

        let mut parts = token.splitn(3, separator);
        let language = parts.next().unwrap_or_default();
        let country = parts.next().unwrap_or_default();
        let variant = parts.next();

        let language = if language.is_empty() {
            if country.is_empty() {
                return Err(LocaleError::new(token, "missing language and country"));
            }
            String::new()
        } else {
            parse_language(language).map_err(|_| LocaleError::new(token, "invalid language"))?
        };

        let country = if country.is_empty() {
            if variant.is_none() {
                return Err(LocaleError::new(token, "dangling separator"));
            }
            None
        } else if is_country(country) {
            Some(country.to_string())
        } else {
            return Err(LocaleError::new(token, "invalid country"));
        };

        let variant = match variant {
            None => None,
            Some(v) if is_variant(v, separator) => Some(v.replace(separator, "_")),
            Some(_) => return Err(LocaleError::new(token, "invalid variant")),
        };

        Ok(LocaleTag {
            language,
            country,
            variant,
        })
    }
}

fn parse_language(value: &str) -> Result<String, LocaleError> {
    if (2..=3).contains(&value.len()) && value.chars().all(|c| c.is_ascii_lowercase()) {
        Ok(value.to_string())
    } else {
        Err(LocaleError::new(value, "invalid language"))
    }
}

fn is_country(value: &str) -> bool {
    (value.len() == 2 && value.chars().all(|c| c.is_ascii_uppercase()))
        || (value.len() == 3 && value.chars().all(|c| c.is_ascii_digit()))
}

fn is_variant(value: &str, separator: char) -> bool {
    !value.is_empty()
        && !value.starts_with(separator)
        && !value.ends_with(separator)
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == separator)
}

/// Locale of a bundle file, or of a locale to check
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Locale {
    /// File without locale suffix (the bundle's base file)
    Unlocalized,
    /// Concrete locale
    Tag(LocaleTag),
}

impl Locale {
    /// Parse a locale from configuration.
    ///
    /// Blank tokens yield `Ok(None)` so callers can drop them silently. The
    /// [`NO_LOCALE_SENTINEL`] (any case) yields [`Locale::Unlocalized`].
    pub fn parse_optional(token: &str) -> Result<Option<Self>, LocaleError> {
        let token = token.trim();
        if token.is_empty() {
            return Ok(None);
        }
        if token.eq_ignore_ascii_case(NO_LOCALE_SENTINEL) {
            return Ok(Some(Locale::Unlocalized));
        }
        token.parse::<LocaleTag>().map(|tag| Some(Locale::Tag(tag)))
    }

    /// Concrete tag, `None` for the unlocalized value
    pub fn tag(&self) -> Option<&LocaleTag> {
        match self {
            Locale::Unlocalized => None,
            Locale::Tag(tag) => Some(tag),
        }
    }

    /// `" for the locale 'xx'"`, empty for the unlocalized value
    pub fn message_suffix(&self) -> String {
        self.tag()
            .map(|tag| format!(" for the locale '{tag}'"))
            .unwrap_or_default()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::Unlocalized => f.write_str(NO_LOCALE_SENTINEL),
            Locale::Tag(tag) => tag.fmt(f),
        }
    }
}

impl Serialize for Locale {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Locale::Unlocalized => serializer.serialize_none(),
            Locale::Tag(tag) => serializer.collect_str(tag),
        }
    }
}

/// Shorthand used by tests across the crate
#[cfg(test)]
pub fn locale(token: &str) -> Locale {
    Locale::parse_optional(token).unwrap().unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(token: &str) -> Result<LocaleTag, LocaleError> {
        token.parse()
    }

    #[test]
    fn test_parse_language_only() {
        let t = tag("fr").unwrap();
        assert_eq!(t.language(), "fr");
        assert_eq!(t.country(), None);
        assert_eq!(t.to_string(), "fr");
    }

    #[test]
    fn test_parse_language_and_country() {
        let t = tag("fr_FR").unwrap();
        assert_eq!(t.country(), Some("FR"));
        assert_eq!(t.to_string(), "fr_FR");
    }

    #[test]
    fn test_dash_separator_is_canonicalized() {
        assert_eq!(tag("en-GB").unwrap(), tag("en_GB").unwrap());
        assert_eq!(tag("en-GB").unwrap().to_string(), "en_GB");
    }

    #[test]
    fn test_parse_variant() {
        let t = tag("en_US_POSIX").unwrap();
        assert_eq!(t.variant(), Some("POSIX"));
        assert_eq!(t.to_string(), "en_US_POSIX");

        let t = tag("en__POSIX").unwrap();
        assert_eq!(t.country(), None);
        assert_eq!(t.to_string(), "en__POSIX");
    }

    #[test]
    fn test_parse_country_without_language() {
        let t = tag("_GB").unwrap();
        assert_eq!(t.language(), "");
        assert_eq!(t.to_string(), "_GB");
    }

    #[test]
    fn test_numeric_region() {
        assert_eq!(tag("es_419").unwrap().country(), Some("419"));
    }

    #[test]
    fn test_rejects_malformed_tokens() {
        for token in [
            "f", "FR", "fr_fr", "fr_", "french", "fr_FRA", "_", "__", "en-GB_x", "fr_FR_", "f1",
        ] {
            assert!(tag(token).is_err(), "'{token}' should be rejected");
        }
    }

    #[test]
    fn test_sentinel_maps_to_unlocalized() {
        assert_eq!(
            Locale::parse_optional("null").unwrap(),
            Some(Locale::Unlocalized)
        );
        assert_eq!(
            Locale::parse_optional("  NULL ").unwrap(),
            Some(Locale::Unlocalized)
        );
    }

    #[test]
    fn test_blank_is_discarded() {
        assert_eq!(Locale::parse_optional("").unwrap(), None);
        assert_eq!(Locale::parse_optional(" \t ").unwrap(), None);
    }

    #[test]
    fn test_invalid_is_error() {
        let err = Locale::parse_optional("not a locale").unwrap_err();
        assert_eq!(err.token, "not a locale");
    }

    #[test]
    fn test_message_suffix() {
        assert_eq!(Locale::Unlocalized.message_suffix(), "");
        assert_eq!(locale("de").message_suffix(), " for the locale 'de'");
    }

    #[test]
    fn test_unlocalized_sorts_first() {
        let mut locales = vec![locale("fr"), Locale::Unlocalized, locale("de")];
        locales.sort();
        assert_eq!(locales[0], Locale::Unlocalized);
        assert_eq!(locales[1], locale("de"));
    }

    #[test]
    fn test_serialize() {
        assert_eq!(serde_json::to_string(&locale("pt_BR")).unwrap(), "\"pt_BR\"");
        assert_eq!(serde_json::to_string(&Locale::Unlocalized).unwrap(), "null");
    }
}
