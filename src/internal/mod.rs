//! logline's own diagnostic channel for config loading and the CLI.
//!
//! Lines are rendered through a [`LineFormatter`] and written to stderr. The channel is
//! initialized at most once via `OnceLock`; calls made before `init_with_config` are dropped.
//! `LineFormatter::format` never reports through here.

use crate::config::Config;
use crate::fmt::{LineFormatter, LogEvent, Zone};
use crate::level::{Level, LocalizedNames};
use chrono::Utc;
use std::io::{self, Write};
use std::sync::OnceLock;

struct Channel {
    min_level: Level,
    formatter: LineFormatter,
}

static CHANNEL: OnceLock<Channel> = OnceLock::new();

/// Initializes from an already-loaded config. Invalid settings fall back to defaults
/// and are reported once the channel is up, together with the warnings collected
/// while the config was loaded.
pub fn init_with_config(config: &Config) {
    let mut problems = Vec::new();

    let min_level = config.internal_level().unwrap_or_else(|e| {
        problems.push(e.to_string());
        Level::Warn
    });
    let zone = config.zone().unwrap_or_else(|e| {
        problems.push(e.to_string());
        Zone::Local
    });
    let names = config.level_names().unwrap_or_else(|e| {
        problems.push(e.to_string());
        LocalizedNames::from_env()
    });

    let was_init = CHANNEL.get().is_some();
    CHANNEL.get_or_init(|| Channel {
        min_level,
        formatter: LineFormatter::new().zone(zone).names(names),
    });

    if !was_init {
        for warning in config.warnings() {
            warn("CONFIG", warning);
        }
        for problem in &problems {
            warn("INTERNAL", &format!("Ignoring config setting: {problem}"));
        }
        debug("INTERNAL", &format!("Diagnostics at level {min_level}"));
    }
}

/// Current wall-clock time in epoch milliseconds.
pub(crate) fn now_millis() -> u64 {
    u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0)
}

fn log(level: Level, scope: &str, msg: &str) {
    let Some(channel) = CHANNEL.get() else {
        return;
    };
    if level < channel.min_level {
        return;
    }

    // Routed through a placeholder so braces in `msg` are never read as a template.
    let event = LogEvent::new(now_millis(), scope, level, "{0}").arg(msg);
    let mut stderr = io::stderr().lock();
    // Best-effort.
    let _ = match channel.formatter.format(&event) {
        Ok(line) => stderr.write_all(line.as_str().as_bytes()),
        Err(_) => writeln!(stderr, "{scope}: {level}: {msg}"),
    };
}

pub fn trace(scope: &str, msg: &str) {
    log(Level::Trace, scope, msg);
}

pub fn debug(scope: &str, msg: &str) {
    log(Level::Debug, scope, msg);
}

pub fn info(scope: &str, msg: &str) {
    log(Level::Info, scope, msg);
}

pub fn warn(scope: &str, msg: &str) {
    log(Level::Warn, scope, msg);
}

pub fn error(scope: &str, msg: &str) {
    log(Level::Error, scope, msg);
}
