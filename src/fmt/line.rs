//! One event in, one terminated line out: `HH:MM:SS <source>: <level>: <message>`.

use super::clock::Zone;
use super::error::FormatError;
use super::message;
use crate::level::{Level, LevelNames, Locale, LocalizedNames};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Platform line terminator appended to every formatted line.
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
/// Platform line terminator appended to every formatted line.
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// A single occurrence to be rendered. Constructed and owned by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEvent {
    /// Milliseconds since the Unix epoch.
    pub timestamp_millis: u64,
    /// Emitting component, e.g. `kernel.boot`. May be empty. Line breaks are written as
    /// the escapes `\n` and `\r` so the name never splits the line.
    pub source_name: String,
    pub level: Level,
    /// Message template with optional `{N}` placeholders.
    pub raw_message: String,
    #[serde(default)]
    pub message_args: Vec<Value>,
}

impl LogEvent {
    /// An event with no message arguments.
    #[must_use]
    pub fn new(
        timestamp_millis: u64,
        source_name: impl Into<String>,
        level: Level,
        raw_message: impl Into<String>,
    ) -> Self {
        Self {
            timestamp_millis,
            source_name: source_name.into(),
            level,
            raw_message: raw_message.into(),
            message_args: Vec::new(),
        }
    }

    /// Appends one positional argument.
    #[must_use]
    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.message_args.push(value.into());
        self
    }

    /// Replaces the whole argument list.
    #[must_use]
    pub fn args(mut self, values: Vec<Value>) -> Self {
        self.message_args = values;
        self
    }
}

/// The rendered text of one event, always ending in exactly one [`LINE_ENDING`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FormattedLine(String);

impl FormattedLine {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for FormattedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for FormattedLine {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<FormattedLine> for String {
    fn from(line: FormattedLine) -> Self {
        line.0
    }
}

/// Stateless event-to-line renderer.
///
/// Holds only the zone and display-name lookup it was built with, so a single
/// instance can be shared by reference across threads and `format` needs no locking.
pub struct LineFormatter {
    zone: Zone,
    names: Box<dyn LevelNames>,
}

impl Default for LineFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LineFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineFormatter")
            .field("zone", &self.zone)
            .finish_non_exhaustive()
    }
}

impl LineFormatter {
    /// Local time zone and level names for the locale found in the environment.
    #[must_use]
    pub fn new() -> Self {
        Self {
            zone: Zone::Local,
            names: Box::new(LocalizedNames::from_env()),
        }
    }

    #[must_use]
    pub const fn zone(mut self, zone: Zone) -> Self {
        self.zone = zone;
        self
    }

    /// Swaps the display-name lookup.
    #[must_use]
    pub fn names(mut self, names: impl LevelNames + 'static) -> Self {
        self.names = Box::new(names);
        self
    }

    /// Shorthand for `names(LocalizedNames::new(locale))`.
    #[must_use]
    pub fn locale(self, locale: Locale) -> Self {
        self.names(LocalizedNames::new(locale))
    }

    #[must_use]
    pub const fn current_zone(&self) -> Zone {
        self.zone
    }

    /// Resolves the text shown for `level`.
    ///
    /// # Errors
    /// `FormatError::UnresolvableLevel` when the lookup returns nothing, a blank
    /// name, or a name containing a line break.
    pub fn level_name(&self, level: Level) -> Result<String, FormatError> {
        match self.names.display_name(level) {
            Some(name) if !name.trim().is_empty() && !name.contains(['\n', '\r']) => {
                Ok(name.into_owned())
            }
            _ => Err(FormatError::UnresolvableLevel(level)),
        }
    }

    /// Renders `event` as `HH:MM:SS <source>: <level>: <message>` plus one line terminator.
    ///
    /// # Errors
    /// - `FormatError::ArgumentMismatch` when the arguments do not fit the template.
    /// - `FormatError::UnresolvableLevel` when the level has no display name.
    /// - `FormatError::TimestampOutOfRange` for instants the calendar cannot hold.
    pub fn format(&self, event: &LogEvent) -> Result<FormattedLine, FormatError> {
        let mut line = String::with_capacity(
            event.source_name.len() + event.raw_message.len() + 32,
        );
        self.zone.write_clock(&mut line, event.timestamp_millis)?;
        let level = self.level_name(event.level)?;
        let message = message::substitute(&event.raw_message, &event.message_args)?;

        line.push(' ');
        push_source_name(&mut line, &event.source_name);
        line.push_str(": ");
        line.push_str(&level);
        line.push_str(": ");
        line.push_str(&message);
        line.push_str(LINE_ENDING);

        Ok(FormattedLine(line))
    }
}

fn push_source_name(out: &mut String, name: &str) {
    for ch in name.chars() {
        match ch {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            c => out.push(c),
        }
    }
}
