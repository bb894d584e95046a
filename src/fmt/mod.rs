//! Line rendering is split by field: the clock, the message template, and the
//! composing formatter each live in their own module.

mod clock;
mod error;
mod line;
pub mod message;

pub use clock::{ParseZoneError, Zone};
pub use error::{FormatError, MismatchReason};
pub use line::{FormattedLine, LINE_ENDING, LineFormatter, LogEvent};
pub use message::{ArgStyle, MessageSegment, MessageTemplate, substitute};
