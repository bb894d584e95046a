#![no_main]
use libfuzzer_sys::fuzz_target;
use logline::{CanonicalNames, LINE_ENDING, Level, LineFormatter, LogEvent, Zone};

fuzz_target!(|input: (u64, u8, &str, &str)| {
    let (millis, level, source, message) = input;
    let level = Level::all()[usize::from(level) % Level::all().len()];

    let formatter = LineFormatter::new().zone(Zone::utc()).names(CanonicalNames);
    let event = LogEvent::new(millis, source, level, message).arg("x");

    // Successful output always carries exactly the formatter's own terminator at the end
    if let Ok(line) = formatter.format(&event) {
        assert!(line.as_str().ends_with(LINE_ENDING));
    }
});
