//! Failures reported by `LineFormatter::format`. The formatter never logs or swallows these.

use crate::level::Level;
use std::fmt;

/// Why an argument could not satisfy its placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MismatchReason {
    /// The placeholder index is past the end of the argument list.
    Missing { provided: usize },
    /// Arrays and objects have no single-line text form.
    NotText,
    /// A typed placeholder (`{0,number}`) received a value of another kind.
    WrongType { expected: &'static str },
}

impl fmt::Display for MismatchReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { provided } => write!(f, "only {provided} argument(s) provided"),
            Self::NotText => f.write_str("value cannot be converted to text"),
            Self::WrongType { expected } => write!(f, "expected a {expected}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The message arguments do not satisfy the template's placeholders.
    ArgumentMismatch { index: usize, reason: MismatchReason },
    /// The display-name lookup had no usable name for the level.
    UnresolvableLevel(Level),
    /// The timestamp lies outside the range the calendar can represent.
    TimestampOutOfRange(u64),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ArgumentMismatch { index, reason } => {
                write!(f, "argument mismatch at placeholder {{{index}}}: {reason}")
            }
            Self::UnresolvableLevel(level) => {
                write!(f, "no display name for level '{level}'")
            }
            Self::TimestampOutOfRange(ms) => write!(f, "timestamp out of range: {ms}ms"),
        }
    }
}

impl std::error::Error for FormatError {}
