//! Single-event command implementation.

use crate::cli::parse_arg;
use crate::fmt::{LineFormatter, LogEvent};
use crate::internal;
use crate::level::Level;
use std::io::{self, Write};
use std::process::ExitCode;

/// Handles `logline line [-s SOURCE] [-l LEVEL] [-t MILLIS] <TEMPLATE> [ARGS...]`.
#[must_use]
pub fn cmd_line(
    formatter: &LineFormatter,
    source: &str,
    level: Level,
    time: Option<u64>,
    template: &str,
    args: &[String],
) -> ExitCode {
    let event = LogEvent::new(time.unwrap_or_else(internal::now_millis), source, level, template)
        .args(args.iter().map(|a| parse_arg(a)).collect());

    match formatter.format(&event) {
        Ok(line) => {
            if let Err(e) = io::stdout().write_all(line.as_str().as_bytes()) {
                internal::error("LINE", &format!("Write failed: {e}"));
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            internal::error("LINE", &e.to_string());
            ExitCode::FAILURE
        }
    }
}
