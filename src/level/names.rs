//! Severity display names are looked up through a pluggable `LevelNames` so that
//! alternate locales or house styles can be swapped in without touching the line layout.

use super::Level;
use regex::Regex;
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// `language[_TERRITORY][.codeset][@modifier]`, with `-` accepted as the territory separator.
static LOCALE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z]{2,3})(?:[_-]([A-Za-z]{2}|[0-9]{3}))?(?:\.[A-Za-z0-9_-]+)?(?:@\w+)?$")
        .expect("Invalid locale regex")
});

/// Maps a level to the text shown between the source name and the message.
///
/// Implementations are shared across threads by the formatter, hence the `Send + Sync` bound.
/// Returning `None` marks the level as unresolvable.
pub trait LevelNames: Send + Sync {
    fn display_name(&self, level: Level) -> Option<Cow<'_, str>>;
}

impl<F> LevelNames for F
where
    F: Fn(Level) -> Option<String> + Send + Sync,
{
    fn display_name(&self, level: Level) -> Option<Cow<'_, str>> {
        self(level).map(Cow::Owned)
    }
}

/// Always the uppercase canonical name (`INFO`, `WARN`, ...).
#[derive(Debug, Clone, Copy, Default)]
pub struct CanonicalNames;

impl LevelNames for CanonicalNames {
    fn display_name(&self, level: Level) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(level.canonical_name()))
    }
}

/// A parsed POSIX-style locale tag. Only the language and territory take part in lookups.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Locale {
    language: Option<String>,
    territory: Option<String>,
}

impl Locale {
    /// The `C`/`POSIX` locale: canonical names only.
    #[must_use]
    pub const fn posix() -> Self {
        Self {
            language: None,
            territory: None,
        }
    }

    /// Reads `LC_ALL`, `LC_MESSAGES` and `LANG` in that order; the first non-empty one wins.
    /// Unparseable or missing values fall back to the POSIX locale.
    #[must_use]
    pub fn from_env() -> Self {
        ["LC_ALL", "LC_MESSAGES", "LANG"]
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .find(|value| !value.is_empty())
            .and_then(|value| value.parse().ok())
            .unwrap_or_default()
    }

    /// Lowercase ISO 639 language code, `None` for the POSIX locale.
    #[must_use]
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// Uppercase territory code if the tag carried one.
    #[must_use]
    pub fn territory(&self) -> Option<&str> {
        self.territory.as_deref()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.language, &self.territory) {
            (Some(lang), Some(territory)) => write!(f, "{lang}_{territory}"),
            (Some(lang), None) => f.write_str(lang),
            _ => f.write_str("C"),
        }
    }
}

/// Returned when a locale tag does not follow `language[_TERRITORY][.codeset][@modifier]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLocaleError(String);

impl fmt::Display for ParseLocaleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid locale tag: '{}'", self.0)
    }
}

impl std::error::Error for ParseLocaleError {}

impl FromStr for Locale {
    type Err = ParseLocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("c")
            || trimmed.eq_ignore_ascii_case("posix")
            || trimmed.to_ascii_lowercase().starts_with("c.")
        {
            return Ok(Self::posix());
        }

        let caps = LOCALE_REGEX
            .captures(trimmed)
            .ok_or_else(|| ParseLocaleError(s.to_string()))?;

        Ok(Self {
            language: caps.get(1).map(|m| m.as_str().to_ascii_lowercase()),
            territory: caps.get(2).map(|m| m.as_str().to_ascii_uppercase()),
        })
    }
}

/// Built-in translations keyed by language code. Levels missing from a table use the canonical name.
fn catalog(language: &str) -> &'static [(Level, &'static str)] {
    match language {
        "de" => &[
            (Level::Trace, "VERFOLGUNG"),
            (Level::Debug, "DEBUG"),
            (Level::Info, "INFO"),
            (Level::Warn, "WARNUNG"),
            (Level::Error, "FEHLER"),
        ],
        "es" => &[
            (Level::Trace, "TRAZA"),
            (Level::Debug, "DEPURACIÓN"),
            (Level::Info, "INFO"),
            (Level::Warn, "ADVERTENCIA"),
            (Level::Error, "ERROR"),
        ],
        "fr" => &[
            (Level::Trace, "TRACE"),
            (Level::Debug, "DÉBOGAGE"),
            (Level::Info, "INFO"),
            (Level::Warn, "AVERTISSEMENT"),
            (Level::Error, "ERREUR"),
        ],
        _ => &[],
    }
}

/// Locale-aware names: explicit overrides first, then the built-in catalog, then the canonical name.
#[derive(Debug, Clone, Default)]
pub struct LocalizedNames {
    locale: Locale,
    names: HashMap<Level, String>,
}

impl LocalizedNames {
    /// Seeds the table from the built-in catalog for the locale's language.
    #[must_use]
    pub fn new(locale: Locale) -> Self {
        let names = locale
            .language()
            .map(catalog)
            .unwrap_or_default()
            .iter()
            .map(|(level, name)| (*level, (*name).to_string()))
            .collect();

        Self { locale, names }
    }

    /// Shorthand for `LocalizedNames::new(Locale::from_env())`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(Locale::from_env())
    }

    /// Replaces the name for one level, regardless of locale.
    #[must_use]
    pub fn label(mut self, level: Level, name: impl Into<String>) -> Self {
        self.names.insert(level, name.into());
        self
    }

    #[must_use]
    pub const fn locale(&self) -> &Locale {
        &self.locale
    }
}

impl LevelNames for LocalizedNames {
    fn display_name(&self, level: Level) -> Option<Cow<'_, str>> {
        Some(self.names.get(&level).map_or_else(
            || Cow::Borrowed(level.canonical_name()),
            |name| Cow::Borrowed(name.as_str()),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_posix_tag() {
        let locale: Locale = "de_DE.UTF-8".parse().unwrap();
        assert_eq!(locale.language(), Some("de"));
        assert_eq!(locale.territory(), Some("DE"));
    }

    #[test]
    fn parses_bcp47_style_tag() {
        let locale: Locale = "fr-ca".parse().unwrap();
        assert_eq!(locale.language(), Some("fr"));
        assert_eq!(locale.territory(), Some("CA"));
        assert_eq!(locale.to_string(), "fr_CA");
    }

    #[test]
    fn c_and_posix_have_no_language() {
        for tag in ["C", "POSIX", "C.UTF-8"] {
            let locale: Locale = tag.parse().unwrap();
            assert_eq!(locale, Locale::posix(), "{tag}");
        }
    }

    #[test]
    fn rejects_garbage() {
        assert!("not a locale".parse::<Locale>().is_err());
        assert!("".parse::<Locale>().is_err());
    }

    #[test]
    fn localized_names_keep_their_locale() {
        let names = LocalizedNames::new("es_MX".parse().unwrap());
        assert_eq!(names.locale().language(), Some("es"));
        assert_eq!(names.locale().to_string(), "es_MX");
    }

    #[test]
    fn unknown_language_has_empty_catalog() {
        assert!(catalog("xx").is_empty());
        assert_eq!(catalog("de").len(), Level::all().len());
    }
}
