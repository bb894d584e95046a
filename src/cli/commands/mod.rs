//! Each subcommand lives in its own file, keeping the match in main thin.
//! Handlers own their error reporting and return the process exit code.

mod json;
mod levels;
mod line;

pub use json::{StreamStats, cmd_json, format_stream};
pub use levels::cmd_levels;
pub use line::cmd_line;
