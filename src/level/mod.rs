//! Closed, ordered severity scale attached to every log event.

mod names;

pub use names::{CanonicalNames, LevelNames, Locale, LocalizedNames, ParseLocaleError};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ordered from least to most severe so callers can compare against a threshold.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// High-volume instrumentation.
    Trace = 0,
    /// Startup, teardown, and state-change details.
    Debug = 1,
    /// Normal operational milestones.
    #[default]
    Info = 2,
    /// Non-fatal anomalies.
    #[serde(alias = "warning")]
    Warn = 3,
    /// Failures that prevent an operation from completing.
    #[serde(alias = "err")]
    Error = 4,
}

impl Level {
    /// Lowercase form used by config files, CLI arguments and JSON events.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }

    /// Uppercase name shown in a formatted line when no localized variant exists.
    #[must_use]
    pub const fn canonical_name(self) -> &'static str {
        match self {
            Self::Trace => "TRACE",
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        }
    }

    /// Every level in ascending severity.
    #[must_use]
    pub const fn all() -> [Self; 5] {
        [
            Self::Trace,
            Self::Debug,
            Self::Info,
            Self::Warn,
            Self::Error,
        ]
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `FromStr` so callers can tell "unknown level" apart from other parse failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level: '{}'", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" | "err" => Ok(Self::Error),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}
