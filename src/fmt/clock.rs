//! Renders epoch milliseconds as a zero-padded `HH:MM:SS` wall-clock time.

use super::error::FormatError;
use chrono::{DateTime, FixedOffset, Local, Offset, Timelike, Utc};
use regex::Regex;
use std::fmt::{self, Write};
use std::str::FromStr;
use std::sync::LazyLock;

/// `+HH:MM`, `-HHMM` or `+HH`.
static OFFSET_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([+-])([0-9]{2})(?::?([0-9]{2}))?$").expect("Invalid offset regex")
});

/// The time zone used for the clock field of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Zone {
    /// The process's local zone, as configured by the operating system.
    #[default]
    Local,
    /// A fixed UTC offset, independent of the host configuration.
    Fixed(FixedOffset),
}

impl Zone {
    #[must_use]
    pub fn utc() -> Self {
        Self::Fixed(Utc.fix())
    }

    /// Writes `HH:MM:SS` for `millis` into `out`.
    ///
    /// # Errors
    /// `FormatError::TimestampOutOfRange` when the instant cannot be represented.
    pub fn write_clock(self, out: &mut String, millis: u64) -> Result<(), FormatError> {
        let utc = i64::try_from(millis)
            .ok()
            .and_then(DateTime::from_timestamp_millis)
            .ok_or(FormatError::TimestampOutOfRange(millis))?;

        let (hour, minute, second) = match self {
            Self::Local => {
                let t = utc.with_timezone(&Local);
                (t.hour(), t.minute(), t.second())
            }
            Self::Fixed(offset) => {
                let t = utc.with_timezone(&offset);
                (t.hour(), t.minute(), t.second())
            }
        };

        // Writing into a String cannot fail.
        let _ = write!(out, "{hour:02}:{minute:02}:{second:02}");
        Ok(())
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local => f.write_str("local"),
            Self::Fixed(offset) if offset.local_minus_utc() == 0 => f.write_str("utc"),
            Self::Fixed(offset) => write!(f, "{offset}"),
        }
    }
}

/// Returned when a zone string is neither `local`, `utc` nor a `+HH:MM` offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseZoneError(String);

impl fmt::Display for ParseZoneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid time zone: '{}'", self.0)
    }
}

impl std::error::Error for ParseZoneError {}

impl FromStr for Zone {
    type Err = ParseZoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_lowercase().as_str() {
            "local" => return Ok(Self::Local),
            "utc" | "z" | "gmt" => return Ok(Self::utc()),
            _ => {}
        }

        let err = || ParseZoneError(s.to_string());
        let caps = OFFSET_REGEX.captures(trimmed).ok_or_else(err)?;

        let hours: i32 = caps[2].parse().map_err(|_| err())?;
        let minutes: i32 = caps
            .get(3)
            .map_or(Ok(0), |m| m.as_str().parse())
            .map_err(|_| err())?;
        if minutes >= 60 {
            return Err(err());
        }

        let seconds = (hours * 60 + minutes) * 60;
        let seconds = if &caps[1] == "-" { -seconds } else { seconds };

        FixedOffset::east_opt(seconds).map(Self::Fixed).ok_or_else(err)
    }
}
