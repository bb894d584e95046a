use logline::{CanonicalNames, Level, LevelNames, Locale, LocalizedNames};

fn name(names: &impl LevelNames, level: Level) -> String {
    names.display_name(level).unwrap().into_owned()
}

#[test]
fn canonical_names() {
    assert_eq!(name(&CanonicalNames, Level::Info), "INFO");
    assert_eq!(name(&CanonicalNames, Level::Error), "ERROR");
}

#[test]
fn german_catalog() {
    let names = LocalizedNames::new("de_DE.UTF-8".parse().unwrap());
    assert_eq!(name(&names, Level::Warn), "WARNUNG");
    assert_eq!(name(&names, Level::Error), "FEHLER");
    assert_eq!(name(&names, Level::Info), "INFO");
}

#[test]
fn unknown_language_falls_back_to_canonical() {
    let names = LocalizedNames::new("ja_JP".parse().unwrap());
    for level in Level::all() {
        assert_eq!(name(&names, level), level.canonical_name());
    }
}

#[test]
fn posix_locale_uses_canonical_names() {
    let names = LocalizedNames::new(Locale::posix());
    assert_eq!(name(&names, Level::Debug), "DEBUG");
}

#[test]
fn label_overrides_win_over_catalog() {
    let names = LocalizedNames::new("fr".parse().unwrap()).label(Level::Warn, "ATTENTION");
    assert_eq!(name(&names, Level::Warn), "ATTENTION");
    assert_eq!(name(&names, Level::Error), "ERREUR");
}

#[test]
fn closures_are_lookups() {
    let lookup = |level: Level| (level >= Level::Warn).then(|| "LOUD".to_string());
    assert_eq!(name(&lookup, Level::Error), "LOUD");
    assert!(lookup.display_name(Level::Info).is_none());
}
