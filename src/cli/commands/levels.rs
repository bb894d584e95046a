//! Level listing command implementation.

use crate::fmt::LineFormatter;
use crate::internal;
use crate::level::Level;
use std::process::ExitCode;

/// Handles `logline levels`: one `<level> <display name>` row per level.
#[must_use]
pub fn cmd_levels(formatter: &LineFormatter) -> ExitCode {
    let mut status = ExitCode::SUCCESS;

    for level in Level::all() {
        match formatter.level_name(level) {
            Ok(name) => println!("{:<6} {name}", level.as_str()),
            Err(e) => {
                internal::error("LEVELS", &e.to_string());
                status = ExitCode::FAILURE;
            }
        }
    }

    status
}
