//! Configuration struct definitions.

use serde::Deserialize;

/// Formatter configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FormatterConfig {
    /// Locale tag for level names (e.g. `de_DE.UTF-8`). Taken from the environment when unset.
    pub locale: Option<String>,
    /// `local`, `utc`, or a fixed offset such as `+02:00`. Local time when unset.
    pub timezone: Option<String>,
}

/// Settings for logline's own diagnostics.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct InternalConfig {
    /// Minimum level of diagnostics written to stderr. `warn` when unset.
    pub level: Option<String>,
}
