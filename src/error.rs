//! Error type for configuration loading and the command-line front end.
//!
//! Formatting failures have their own type, [`crate::fmt::FormatError`]; this one wraps it
//! for callers that mix formatting with I/O.

use crate::fmt::FormatError;
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    /// I/O error.
    Io(std::io::Error),
    /// TOML config parsing error.
    ConfigParse(toml::de::Error),
    /// Config directory not found.
    ConfigDirNotFound,
    /// Cyclic include detected in config sources.
    CyclicInclude(PathBuf),
    /// Unknown level name in config or arguments.
    InvalidLevel(String),
    /// Time zone string that is neither `local`, `utc` nor an offset.
    InvalidZone(String),
    /// Malformed locale tag.
    InvalidLocale(String),
    /// An event could not be formatted.
    Format(FormatError),
    /// Malformed JSON event.
    Json(serde_json::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ConfigParse(e) => write!(f, "parse error: {e}"),
            Self::ConfigDirNotFound => write!(f, "config directory not found"),
            Self::CyclicInclude(p) => write!(f, "cyclic include: {}", p.display()),
            Self::InvalidLevel(level) => write!(f, "invalid level: {level}"),
            Self::InvalidZone(zone) => write!(f, "invalid time zone: {zone}"),
            Self::InvalidLocale(locale) => write!(f, "invalid locale: {locale}"),
            Self::Format(e) => write!(f, "format error: {e}"),
            Self::Json(e) => write!(f, "invalid event JSON: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::ConfigParse(e) => Some(e),
            Self::Format(e) => Some(e),
            Self::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::ConfigParse(e)
    }
}

impl From<FormatError> for Error {
    fn from(e: FormatError) -> Self {
        Self::Format(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}
