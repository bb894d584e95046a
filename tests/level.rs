//! Tests for log level functionality.

use logline::Level;

#[test]
fn level_ordering() {
    assert!(Level::Trace < Level::Debug);
    assert!(Level::Debug < Level::Info);
    assert!(Level::Info < Level::Warn);
    assert!(Level::Warn < Level::Error);
}

#[test]
fn level_display() {
    assert_eq!(Level::Trace.to_string(), "trace");
    assert_eq!(Level::Debug.to_string(), "debug");
    assert_eq!(Level::Info.to_string(), "info");
    assert_eq!(Level::Warn.to_string(), "warn");
    assert_eq!(Level::Error.to_string(), "error");
}

#[test]
fn level_canonical_name_is_uppercase() {
    for level in Level::all() {
        assert_eq!(level.canonical_name(), level.as_str().to_uppercase());
    }
}

#[test]
fn level_from_str() {
    assert_eq!("trace".parse::<Level>().unwrap(), Level::Trace);
    assert_eq!("DEBUG".parse::<Level>().unwrap(), Level::Debug);
    assert_eq!("Info".parse::<Level>().unwrap(), Level::Info);
    assert_eq!("warning".parse::<Level>().unwrap(), Level::Warn);
    assert_eq!("err".parse::<Level>().unwrap(), Level::Error);
}

#[test]
fn level_from_str_invalid() {
    let err = "fatal".parse::<Level>().unwrap_err();
    assert_eq!(err.to_string(), "unknown log level: 'fatal'");
}

#[test]
fn level_default() {
    assert_eq!(Level::default(), Level::Info);
}

#[test]
fn level_serde_uses_lowercase_names() {
    assert_eq!(serde_json::to_string(&Level::Warn).unwrap(), "\"warn\"");
    assert_eq!(serde_json::from_str::<Level>("\"warning\"").unwrap(), Level::Warn);
    assert_eq!(serde_json::from_str::<Level>("\"err\"").unwrap(), Level::Error);
    assert!(serde_json::from_str::<Level>("\"INFO\"").is_err());
}
