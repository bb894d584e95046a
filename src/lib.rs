//! `logline` - deterministic single-line log formatting.
//!
//! Turns a structured [`LogEvent`] into one [`FormattedLine`] of the form
//!
//! ```text
//! HH:MM:SS <source>: <level>: <message>
//! ```
//!
//! terminated by exactly one platform line ending. Formatting is a pure function of the
//! event, the formatter's time zone, and its level-name lookup; a single formatter can be
//! shared across threads without locking.
//!
//! # Example
//!
//! ```
//! use logline::{CanonicalNames, Level, LineFormatter, LogEvent, Zone};
//!
//! let formatter = LineFormatter::new()
//!     .zone(Zone::utc())
//!     .names(CanonicalNames);
//!
//! let event = LogEvent::new(50_709_000, "kernel.boot", Level::Info, "started in {0}ms").arg(42);
//! let line = formatter.format(&event).unwrap();
//! assert_eq!(line.as_str().trim_end(), "14:05:09 kernel.boot: INFO: started in 42ms");
//! ```
//!
//! # Features
//!
//! - `cli` (default): enables the `logline` binary and the [`cli`] module

pub mod config;
mod error;
pub mod fmt;
pub mod internal;
pub mod level;

#[cfg(feature = "cli")]
pub mod cli;

pub use config::Config;
pub use error::Error;
pub use fmt::{FormatError, FormattedLine, LINE_ENDING, LineFormatter, LogEvent, MismatchReason, Zone};
pub use level::{CanonicalNames, Level, LevelNames, Locale, LocalizedNames};
