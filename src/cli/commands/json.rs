//! JSON event stream command implementation.

use crate::fmt::{LINE_ENDING, LineFormatter, LogEvent};
use crate::internal;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

/// Tally of one stream run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamStats {
    pub formatted: u64,
    /// Events that failed to parse or format.
    pub failed: u64,
}

/// Formats one JSON `LogEvent` per input line into `output`.
///
/// Blank lines are skipped. Invalid JSON is reported and skipped. An event that fails
/// to format is replaced by its raw message as a degraded line, so the output keeps
/// one line per event.
///
/// # Errors
/// I/O errors on either side of the stream.
pub fn format_stream(
    formatter: &LineFormatter,
    input: impl BufRead,
    mut output: impl Write,
) -> Result<StreamStats, crate::Error> {
    let mut stats = StreamStats::default();

    for (number, line) in input.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        internal::trace("JSON", &format!("Processing line {}", number + 1));

        let event: LogEvent = match serde_json::from_str(&line) {
            Ok(event) => event,
            Err(e) => {
                let err = crate::Error::from(e);
                internal::error("JSON", &format!("Line {}: {err}", number + 1));
                stats.failed += 1;
                continue;
            }
        };

        match formatter.format(&event) {
            Ok(formatted) => {
                output.write_all(formatted.as_str().as_bytes())?;
                stats.formatted += 1;
            }
            Err(e) => {
                let err = crate::Error::from(e);
                internal::warn("JSON", &format!("Line {}: {err}", number + 1));
                output.write_all(event.raw_message.as_bytes())?;
                output.write_all(LINE_ENDING.as_bytes())?;
                stats.failed += 1;
            }
        }
    }

    output.flush()?;
    Ok(stats)
}

/// Handles `logline json`, reading events from stdin.
#[must_use]
pub fn cmd_json(formatter: &LineFormatter) -> ExitCode {
    internal::debug("JSON", "Reading events from stdin");
    let stdin = io::stdin();
    let stdout = io::stdout();

    match format_stream(formatter, stdin.lock(), stdout.lock()) {
        Ok(stats) => {
            internal::info(
                "JSON",
                &format!("Formatted {} event(s), {} failed", stats.formatted, stats.failed),
            );
            if stats.failed == 0 {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            internal::error("JSON", &e.to_string());
            ExitCode::FAILURE
        }
    }
}
