#![no_main]
use libfuzzer_sys::fuzz_target;
use logline::fmt::MessageTemplate;
use serde_json::json;

fuzz_target!(|data: &str| {
    // Must not panic on any template string
    let template = MessageTemplate::parse(data);

    // Rendering may fail with a mismatch but must never panic
    let args = [json!("a"), json!(1), json!(null), json!([1])];
    let _ = template.render(&args);
    let _ = template.render(&[]);
});
