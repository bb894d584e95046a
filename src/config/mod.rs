//! TOML configuration loading and `source = "..."` include resolution.
//!
//! Separated from struct definitions so that the loading logic (file I/O, cycle detection,
//! merge strategy) stays independent of the serde schema.

mod structs;

pub use structs::{FormatterConfig, InternalConfig};

use crate::fmt::{LineFormatter, Zone};
use crate::internal;
use crate::level::{Level, Locale, LocalizedNames};
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

/// An empty file is a valid config: every section falls back to its defaults.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub formatter: FormatterConfig,
    /// Per-level display-name overrides keyed by level name (`warn = "ACHTUNG"`).
    pub labels: HashMap<String, String>,
    pub internal: InternalConfig,
    /// Non-fatal problems met while loading, kept for replay once diagnostics are up.
    #[serde(skip)]
    warnings: Vec<String>,
}

/// Scans raw TOML for `source = "..."` directives before deserialization, since serde
/// cannot handle them. Returns the extracted paths and the remaining TOML content.
#[doc(hidden)]
#[must_use]
pub fn extract_sources(content: &str) -> (Vec<String>, String) {
    let mut sources = Vec::new();
    let mut remaining = String::new();

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with("source") && trimmed.contains('=') {
            if let Some(path) = trimmed
                .split_once('=')
                .map(|(_, value)| value.trim().trim_matches('"').trim_matches('\''))
                && !path.is_empty()
            {
                sources.push(path.to_string());
            }
        } else {
            remaining.push_str(line);
            remaining.push('\n');
        }
    }

    (sources, remaining)
}

impl Config {
    /// Loads the config from the default location with all includes resolved.
    /// A missing file yields the defaults.
    ///
    /// # Errors
    /// Fails if the config directory can't be determined, a file can't be read or
    /// parsed, or includes form a cycle.
    pub fn load() -> Result<Self, crate::Error> {
        let config_path = Self::get_config_path()?;
        internal::debug(
            "CONFIG",
            &format!("Loading config from {}", config_path.display()),
        );
        Self::load_with_sources(&config_path, &mut HashSet::new())
    }

    /// Loads configuration from an explicit path instead of the default location.
    ///
    /// # Errors
    /// Returns error if the file cannot be read, parsed, or contains cyclic includes.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        let expanded = shellexpand::tilde(&path.to_string_lossy()).into_owned();
        Self::load_with_sources(Path::new(&expanded), &mut HashSet::new())
    }

    /// Parses a config from a string. `source` directives are ignored.
    ///
    /// # Errors
    /// Returns error on TOML syntax or schema errors.
    pub fn parse(content: &str) -> Result<Self, crate::Error> {
        let (_, toml_content) = extract_sources(content);
        Ok(toml::from_str(&toml_content)?)
    }

    fn load_with_sources(path: &Path, seen: &mut HashSet<PathBuf>) -> Result<Self, crate::Error> {
        if !path.exists() {
            internal::debug("CONFIG", "Config file not found, using defaults");
            return Ok(Self::default());
        }

        let canonical = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());

        if !seen.insert(canonical.clone()) {
            internal::warn(
                "CONFIG",
                &format!("Cyclic include detected: {}", canonical.display()),
            );
            return Err(crate::Error::CyclicInclude(canonical));
        }

        let content = fs::read_to_string(path)?;
        let (sources, toml_content) = extract_sources(&content);
        let mut config: Self = toml::from_str(&toml_content)?;

        for source_path in sources {
            internal::debug("CONFIG", &format!("Processing source: {source_path}"));
            let expanded = shellexpand::tilde(&source_path);
            let source_file = Path::new(expanded.as_ref());
            if source_file.exists() {
                let source_config = Self::load_with_sources(source_file, seen)?;
                config.merge(source_config);
            } else {
                let warning = format!("Source file not found: {source_path}");
                internal::warn("CONFIG", &warning);
                config.warnings.push(warning);
            }
        }

        Ok(config)
    }

    /// Folds an included config into `self`; values already set here take precedence.
    pub fn merge(&mut self, other: Self) {
        if self.formatter.locale.is_none() {
            self.formatter.locale = other.formatter.locale;
        }
        if self.formatter.timezone.is_none() {
            self.formatter.timezone = other.formatter.timezone;
        }
        if self.internal.level.is_none() {
            self.internal.level = other.internal.level;
        }
        for (k, v) in other.labels {
            self.labels.entry(k).or_insert(v);
        }
        self.warnings.extend(other.warnings);
    }

    /// Problems skipped while loading, such as includes that do not exist.
    #[must_use]
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// `<config_dir>/logline/logline.toml`, e.g. `~/.config/logline/logline.toml` on Linux.
    ///
    /// # Errors
    /// Fails when the platform has no concept of a config directory.
    pub fn get_config_path() -> Result<PathBuf, crate::Error> {
        directories::ProjectDirs::from("", "", "logline")
            .map(|dirs| dirs.config_dir().join("logline.toml"))
            .ok_or(crate::Error::ConfigDirNotFound)
    }

    /// Threshold for logline's own diagnostics, `Warn` when unset.
    ///
    /// # Errors
    /// `Error::InvalidLevel` for an unknown level name.
    pub fn internal_level(&self) -> Result<Level, crate::Error> {
        self.internal.level.as_deref().map_or(Ok(Level::Warn), |level| {
            level
                .parse()
                .map_err(|_| crate::Error::InvalidLevel(level.to_string()))
        })
    }

    /// The configured zone, or local time when unset.
    ///
    /// # Errors
    /// `Error::InvalidZone` when the string is not `local`, `utc`, or an offset.
    pub fn zone(&self) -> Result<Zone, crate::Error> {
        self.formatter.timezone.as_deref().map_or(Ok(Zone::Local), |tz| {
            tz.parse()
                .map_err(|_| crate::Error::InvalidZone(tz.to_string()))
        })
    }

    /// The configured locale, or the one found in the environment when unset.
    ///
    /// # Errors
    /// `Error::InvalidLocale` for a malformed tag.
    pub fn locale(&self) -> Result<Locale, crate::Error> {
        self.formatter
            .locale
            .as_deref()
            .map_or_else(
                || Ok(Locale::from_env()),
                |tag| {
                    tag.parse()
                        .map_err(|_| crate::Error::InvalidLocale(tag.to_string()))
                },
            )
    }

    /// Level-name overrides with their keys parsed.
    ///
    /// # Errors
    /// `Error::InvalidLevel` when a key is not a level name.
    pub fn label_overrides(&self) -> Result<HashMap<Level, String>, crate::Error> {
        self.labels
            .iter()
            .map(|(key, name)| {
                key.parse::<Level>()
                    .map(|level| (level, name.clone()))
                    .map_err(|_| crate::Error::InvalidLevel(key.clone()))
            })
            .collect()
    }

    /// Localized names for the configured locale with the label overrides applied.
    ///
    /// # Errors
    /// See [`Config::locale`] and [`Config::label_overrides`].
    pub fn level_names(&self) -> Result<LocalizedNames, crate::Error> {
        let names = LocalizedNames::new(self.locale()?);
        internal::debug("CONFIG", &format!("Level names for locale {}", names.locale()));
        Ok(self
            .label_overrides()?
            .into_iter()
            .fold(names, |names, (level, name)| names.label(level, name)))
    }

    /// Builds the formatter described by this config.
    ///
    /// # Errors
    /// Any zone, locale or label error; the formatter is never built half-configured.
    pub fn build_formatter(&self) -> Result<LineFormatter, crate::Error> {
        Ok(LineFormatter::new()
            .zone(self.zone()?)
            .names(self.level_names()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_sources_strips_directives() {
        let (sources, rest) = extract_sources(
            "source = \"~/a.toml\"\nsource='b.toml'\n[labels]\ninfo = \"I\"\n",
        );
        assert_eq!(sources, vec!["~/a.toml".to_string(), "b.toml".to_string()]);
        assert_eq!(rest, "[labels]\ninfo = \"I\"\n");
    }

    #[test]
    fn merge_keeps_primary_values() {
        let mut primary = Config::parse(
            "[formatter]\ntimezone = \"utc\"\n[labels]\ninfo = \"MAIN\"\n",
        )
        .unwrap();
        let include = Config::parse(
            "[formatter]\ntimezone = \"+01:00\"\nlocale = \"de\"\n[labels]\ninfo = \"X\"\nwarn = \"W\"\n",
        )
        .unwrap();

        primary.merge(include);
        assert_eq!(primary.formatter.timezone.as_deref(), Some("utc"));
        assert_eq!(primary.formatter.locale.as_deref(), Some("de"));
        assert_eq!(primary.labels["info"], "MAIN");
        assert_eq!(primary.labels["warn"], "W");
    }
}
