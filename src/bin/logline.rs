//! `logline` renders log events in the same line layout the library produces.
//!
//! Usage:
//!   logline line [-s SOURCE] [-l LEVEL] [-t MILLIS] <TEMPLATE> [ARGS...]
//!   logline json                         Format JSON events from stdin
//!   logline levels                       List level display names
//!
//! Global options: `--config PATH`, `--zone ZONE`, `--locale TAG`.

use clap::Parser;
use logline::cli::{Cli, Command, build_formatter, cmd_json, cmd_levels, cmd_line, load_config};
use logline::internal;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(&cli.options) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Diagnostics must be up before any command runs
    internal::init_with_config(&config);

    let formatter = match build_formatter(&config) {
        Ok(f) => f,
        Err(e) => {
            internal::error("CLI", &e.to_string());
            return ExitCode::FAILURE;
        }
    };

    match cli.command {
        Command::Line {
            source,
            level,
            time,
            template,
            args,
        } => cmd_line(&formatter, &source, level.into(), time, &template, &args),
        Command::Json => cmd_json(&formatter),
        Command::Levels => cmd_levels(&formatter),
    }
}
