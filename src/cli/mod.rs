//! Argument parsing for the `logline` binary and the glue from flags to a configured
//! [`LineFormatter`]. `--zone` and `--locale` override the config file.

pub mod commands;

pub use commands::{StreamStats, cmd_json, cmd_levels, cmd_line, format_stream};

use crate::config::Config;
use crate::fmt::LineFormatter;
use crate::internal;
use clap::{Args, Parser, Subcommand};
use serde_json::Value;
use std::path::PathBuf;

/// Log level for CLI arguments.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for crate::level::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Self::Trace,
            LogLevel::Debug => Self::Debug,
            LogLevel::Info => Self::Info,
            LogLevel::Warn => Self::Warn,
            LogLevel::Error => Self::Error,
        }
    }
}

/// logline - Format log events as single text lines.
#[derive(Parser)]
#[command(
    name = "logline",
    version,
    about = "Format log events as single text lines"
)]
pub struct Cli {
    #[command(flatten)]
    pub options: FormatOptions,
    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every subcommand.
#[derive(Debug, Clone, Default, Args)]
pub struct FormatOptions {
    /// Config file (defaults to the platform config directory)
    #[arg(short, long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
    /// Time zone: local, utc, or an offset like +02:00
    #[arg(short, long, global = true)]
    pub zone: Option<String>,
    /// Locale for level names, e.g. de_DE.UTF-8
    #[arg(long, global = true)]
    pub locale: Option<String>,
}

/// CLI subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Format a single event.
    Line {
        /// Source (logger) name
        #[arg(short, long, default_value = "")]
        source: String,
        /// Log level
        #[arg(short, long, value_enum, default_value = "info")]
        level: LogLevel,
        /// Timestamp in epoch milliseconds (defaults to now)
        #[arg(short, long, value_name = "MILLIS")]
        time: Option<u64>,
        /// Message template with {0}-style placeholders
        template: String,
        /// Placeholder values, parsed as JSON when possible
        args: Vec<String>,
    },
    /// Format JSON events read line by line from stdin.
    Json,
    /// List levels and their display names.
    Levels,
}

/// Loads the config named by `--config` (or the default one) and applies the flag overrides.
///
/// # Errors
/// Config I/O or parse errors.
pub fn load_config(options: &FormatOptions) -> Result<Config, crate::Error> {
    let mut config = match &options.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    if let Some(zone) = &options.zone {
        config.formatter.timezone = Some(zone.clone());
    }
    if let Some(locale) = &options.locale {
        config.formatter.locale = Some(locale.clone());
    }

    Ok(config)
}

/// Builds the formatter for a command run.
///
/// # Errors
/// Invalid zone, locale or label settings.
pub fn build_formatter(config: &Config) -> Result<LineFormatter, crate::Error> {
    let formatter = config.build_formatter()?;
    internal::debug(
        "CLI",
        &format!("Formatter ready (zone {})", formatter.current_zone()),
    );
    Ok(formatter)
}

/// Command-line values are JSON when they parse as JSON (`42`, `true`, `"quoted"`),
/// plain strings otherwise.
#[must_use]
pub fn parse_arg(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}
